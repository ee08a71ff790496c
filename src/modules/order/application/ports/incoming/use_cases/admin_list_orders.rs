use async_trait::async_trait;

use crate::modules::order::application::domain::entities::AdminOrderFilter;
use crate::modules::order::application::ports::outgoing::{OrderQueryError, OrderWithCustomer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminListOrdersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for AdminListOrdersError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => AdminListOrdersError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait AdminListOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: AdminOrderFilter,
    ) -> Result<Vec<OrderWithCustomer>, AdminListOrdersError>;
}
