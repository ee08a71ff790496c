use async_trait::async_trait;

use crate::modules::order::application::domain::entities::{AdminOrderFilter, OrderStatus};
use crate::modules::order::application::ports::incoming::use_cases::{
    AdminDashboard, AdminDashboardError, AdminDashboardUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderListFilter, OrderQuery, OrderSort};

const TODAY_QUEUE_LIMIT: u64 = 20;
const FULL_QUEUE_LIMIT: u64 = 50;

pub struct AdminDashboardService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> AdminDashboardService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> AdminDashboardUseCase for AdminDashboardService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: AdminOrderFilter,
    ) -> Result<AdminDashboard, AdminDashboardError> {
        let limit = match filter {
            AdminOrderFilter::Today => TODAY_QUEUE_LIMIT,
            AdminOrderFilter::All => FULL_QUEUE_LIMIT,
        };
        let queue_filter = OrderListFilter::default()
            .with_statuses(&OrderStatus::ACTIVE)
            .sorted(OrderSort::Oldest)
            .limited(limit);

        let (active_count, total_revenue, queue) = tokio::try_join!(
            self.query.count_by_status(&OrderStatus::ACTIVE, None),
            self.query.sum_price(&OrderStatus::REVENUE),
            self.query.list_with_customer(queue_filter),
        )?;

        Ok(AdminDashboard {
            active_count,
            total_revenue,
            queue,
        })
    }
}
