use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOrderStatusError {
    Unauthorized,
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateOrderStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOrderStatusError::Unauthorized => write!(f, "Unauthorized"),
            UpdateOrderStatusError::NotFound => write!(f, "Order not found"),
            UpdateOrderStatusError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserRole,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, UpdateOrderStatusError>;
}
