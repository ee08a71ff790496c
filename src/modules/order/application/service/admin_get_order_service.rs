use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::order::application::ports::incoming::use_cases::{
    AdminGetOrderError, AdminGetOrderUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderQuery, OrderWithCustomer};

pub struct AdminGetOrderService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> AdminGetOrderService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> AdminGetOrderUseCase for AdminGetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, order_id: Uuid) -> Result<OrderWithCustomer, AdminGetOrderError> {
        self.query
            .get_with_customer(order_id)
            .await?
            .ok_or(AdminGetOrderError::NotFound)
    }
}
