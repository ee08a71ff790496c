use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::ports::outgoing::{OrderQueryError, OrderWithCustomer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminGetOrderError {
    #[error("Order not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for AdminGetOrderError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => AdminGetOrderError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait AdminGetOrderUseCase: Send + Sync {
    async fn execute(&self, order_id: Uuid) -> Result<OrderWithCustomer, AdminGetOrderError>;
}
