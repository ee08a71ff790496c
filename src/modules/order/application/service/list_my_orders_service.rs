use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{CustomerOrderFilter, Order};
use crate::modules::order::application::ports::incoming::use_cases::{
    ListMyOrdersError, ListMyOrdersUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    OrderListFilter, OrderQuery, OrderSort,
};

pub struct ListMyOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> ListMyOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMyOrdersUseCase for ListMyOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        filter: CustomerOrderFilter,
    ) -> Result<Vec<Order>, ListMyOrdersError> {
        let list_filter = OrderListFilter {
            statuses: filter.statuses(),
            ..OrderListFilter::owned_by(owner).sorted(OrderSort::Newest)
        };

        self.query
            .list(list_filter)
            .await
            .map_err(ListMyOrdersError::from)
    }
}
