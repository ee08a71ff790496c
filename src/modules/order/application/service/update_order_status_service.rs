use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::incoming::use_cases::{
    UpdateOrderStatusError, UpdateOrderStatusUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

pub struct UpdateOrderStatusService<R>
where
    R: OrderRepository,
{
    order_repository: R,
}

impl<R> UpdateOrderStatusService<R>
where
    R: OrderRepository,
{
    pub fn new(order_repository: R) -> Self {
        Self { order_repository }
    }
}

#[async_trait]
impl<R> UpdateOrderStatusUseCase for UpdateOrderStatusService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserRole,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, UpdateOrderStatusError> {
        if !actor.is_admin() {
            warn!(%order_id, role = %actor, "Status change rejected for non-admin");
            return Err(UpdateOrderStatusError::Unauthorized);
        }

        let order = self
            .order_repository
            .update_status(order_id, status)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => UpdateOrderStatusError::NotFound,
                OrderRepositoryError::DatabaseError(msg) => {
                    error!(%order_id, error = %msg, "Failed to update order status");
                    UpdateOrderStatusError::RepositoryError(msg)
                }
            })?;

        info!(%order_id, status = %order.status, "Order status updated");
        Ok(order)
    }
}
