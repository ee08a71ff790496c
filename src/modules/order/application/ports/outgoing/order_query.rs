// src/modules/order/application/ports/outgoing/order_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CustomerSummary {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderWithCustomer {
    #[serde(flatten)]
    pub order: Order,
    pub customer: Option<CustomerSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    Newest,
    Oldest,
    RecentlyUpdated,
}

#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    pub owner: Option<UserId>,
    /// `None` means every status.
    pub statuses: Option<Vec<OrderStatus>>,
    pub sort: OrderSort,
    pub limit: Option<u64>,
}

impl OrderListFilter {
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Default::default()
        }
    }

    pub fn with_statuses(mut self, statuses: &[OrderStatus]) -> Self {
        self.statuses = Some(statuses.to_vec());
        self
    }

    pub fn sorted(mut self, sort: OrderSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn limited(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, may join users)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn get_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderQueryError>;

    /// Owner-scoped read
    async fn get_owned(
        &self,
        owner: UserId,
        order_id: Uuid,
    ) -> Result<Option<Order>, OrderQueryError>;

    async fn get_with_customer(
        &self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithCustomer>, OrderQueryError>;

    async fn list(&self, filter: OrderListFilter) -> Result<Vec<Order>, OrderQueryError>;

    async fn list_with_customer(
        &self,
        filter: OrderListFilter,
    ) -> Result<Vec<OrderWithCustomer>, OrderQueryError>;

    /// Counts orders in `statuses`, optionally only those created strictly
    /// before `created_before`.
    async fn count_by_status(
        &self,
        statuses: &[OrderStatus],
        created_before: Option<DateTime<Utc>>,
    ) -> Result<u64, OrderQueryError>;

    async fn sum_price(&self, statuses: &[OrderStatus]) -> Result<i64, OrderQueryError>;
}
