use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::payment::short_payment_reference;
use crate::modules::order::application::domain::queue::{estimated_completion, estimated_days};
use crate::modules::order::application::ports::incoming::use_cases::{
    GetOrderStatusError, GetOrderStatusUseCase, OrderStatusView,
};
use crate::modules::order::application::ports::outgoing::OrderQuery;
use crate::modules::order::application::service::get_queue_position_service::position_of;

pub struct GetOrderStatusService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> GetOrderStatusService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrderStatusUseCase for GetOrderStatusService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        order_id: Uuid,
    ) -> Result<OrderStatusView, GetOrderStatusError> {
        let order = self
            .query
            .get_owned(owner, order_id)
            .await?
            .ok_or(GetOrderStatusError::NotFound)?;

        let payment_reference = short_payment_reference(order.payment_proof.as_deref());

        if order.status.awaits_payment() {
            return Ok(OrderStatusView {
                order,
                queue_position: 0,
                estimated_days: 0,
                estimated_completion: None,
                payment_reference,
            });
        }

        let queue_position = position_of(&self.query, &order).await?;
        let days = estimated_days(queue_position);

        Ok(OrderStatusView {
            order,
            queue_position,
            estimated_days: days,
            estimated_completion: Some(estimated_completion(Utc::now(), days)),
            payment_reference,
        })
    }
}
