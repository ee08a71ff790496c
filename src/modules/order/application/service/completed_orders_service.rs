use async_trait::async_trait;

use crate::modules::order::application::domain::entities::OrderStatus;
use crate::modules::order::application::ports::incoming::use_cases::{
    CompletedOrdersError, CompletedOrdersUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    OrderListFilter, OrderQuery, OrderSort, OrderWithCustomer,
};

pub struct CompletedOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> CompletedOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CompletedOrdersUseCase for CompletedOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<OrderWithCustomer>, CompletedOrdersError> {
        self.query
            .list_with_customer(
                OrderListFilter::default()
                    .with_statuses(&[OrderStatus::Completed])
                    .sorted(OrderSort::RecentlyUpdated),
            )
            .await
            .map_err(CompletedOrdersError::from)
    }
}
