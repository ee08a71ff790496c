use async_trait::async_trait;

use crate::modules::order::application::ports::outgoing::{OrderQueryError, OrderWithCustomer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletedOrdersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for CompletedOrdersError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => CompletedOrdersError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait CompletedOrdersUseCase: Send + Sync {
    /// Most recently finished first.
    async fn execute(&self) -> Result<Vec<OrderWithCustomer>, CompletedOrdersError>;
}
