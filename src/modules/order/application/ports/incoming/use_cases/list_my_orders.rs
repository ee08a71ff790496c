use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{CustomerOrderFilter, Order};
use crate::modules::order::application::ports::outgoing::OrderQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMyOrdersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for ListMyOrdersError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => ListMyOrdersError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListMyOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        filter: CustomerOrderFilter,
    ) -> Result<Vec<Order>, ListMyOrdersError>;
}
