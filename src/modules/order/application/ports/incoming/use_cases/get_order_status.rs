use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::Order;
use crate::modules::order::application::ports::outgoing::OrderQueryError;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderStatusView {
    pub order: Order,
    /// `0` while the order still awaits payment.
    pub queue_position: u64,
    pub estimated_days: u64,
    pub estimated_completion: Option<DateTime<Utc>>,
    pub payment_reference: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrderStatusError {
    #[error("Order not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for GetOrderStatusError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => GetOrderStatusError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        order_id: Uuid,
    ) -> Result<OrderStatusView, GetOrderStatusError>;
}
