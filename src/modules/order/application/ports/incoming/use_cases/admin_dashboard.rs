use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::order::application::domain::entities::AdminOrderFilter;
use crate::modules::order::application::ports::outgoing::{OrderQueryError, OrderWithCustomer};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminDashboard {
    pub active_count: u64,
    pub total_revenue: i64,
    /// Active orders, oldest first.
    pub queue: Vec<OrderWithCustomer>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminDashboardError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for AdminDashboardError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => AdminDashboardError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait AdminDashboardUseCase: Send + Sync {
    async fn execute(&self, filter: AdminOrderFilter)
        -> Result<AdminDashboard, AdminDashboardError>;
}
