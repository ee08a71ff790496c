use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::domain::queue::queue_position;
use crate::modules::order::application::ports::incoming::use_cases::{
    GetQueuePositionError, GetQueuePositionUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

/// Active orders created strictly before `order`, plus one.
pub(crate) async fn position_of<Q>(query: &Q, order: &Order) -> Result<u64, OrderQueryError>
where
    Q: OrderQuery + ?Sized,
{
    let earlier = query
        .count_by_status(&OrderStatus::ACTIVE, Some(order.created_at))
        .await?;
    Ok(queue_position(earlier))
}

pub struct GetQueuePositionService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> GetQueuePositionService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQueuePositionUseCase for GetQueuePositionService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, order_id: Uuid) -> Result<u64, GetQueuePositionError> {
        let Some(order) = self.query.get_by_id(order_id).await? else {
            return Ok(0);
        };

        Ok(position_of(&self.query, &order).await?)
    }
}
