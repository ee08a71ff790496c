use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::ports::outgoing::OrderQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetQueuePositionError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for GetQueuePositionError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => GetQueuePositionError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetQueuePositionUseCase: Send + Sync {
    /// `0` when the order does not exist.
    async fn execute(&self, order_id: Uuid) -> Result<u64, GetQueuePositionError>;
}
