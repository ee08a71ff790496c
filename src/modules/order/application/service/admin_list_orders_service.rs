use async_trait::async_trait;

use crate::modules::order::application::domain::entities::{AdminOrderFilter, OrderStatus};
use crate::modules::order::application::ports::incoming::use_cases::{
    AdminListOrdersError, AdminListOrdersUseCase,
};
use crate::modules::order::application::ports::outgoing::{
    OrderListFilter, OrderQuery, OrderSort, OrderWithCustomer,
};

pub struct AdminListOrdersService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> AdminListOrdersService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> AdminListOrdersUseCase for AdminListOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: AdminOrderFilter,
    ) -> Result<Vec<OrderWithCustomer>, AdminListOrdersError> {
        let mut list_filter = OrderListFilter::default().sorted(OrderSort::Newest);
        if filter == AdminOrderFilter::Today {
            list_filter = list_filter.with_statuses(&OrderStatus::ACTIVE);
        }

        self.query
            .list_with_customer(list_filter)
            .await
            .map_err(AdminListOrdersError::from)
    }
}
