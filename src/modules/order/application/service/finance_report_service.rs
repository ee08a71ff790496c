use async_trait::async_trait;

use crate::modules::order::application::domain::entities::OrderStatus;
use crate::modules::order::application::ports::incoming::use_cases::{
    FinanceReport, FinanceReportError, FinanceReportUseCase,
};
use crate::modules::order::application::ports::outgoing::{OrderListFilter, OrderQuery, OrderSort};

pub struct FinanceReportService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> FinanceReportService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FinanceReportUseCase for FinanceReportService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self) -> Result<FinanceReport, FinanceReportError> {
        let transactions = self
            .query
            .list_with_customer(
                OrderListFilter::default()
                    .with_statuses(&OrderStatus::REVENUE)
                    .sorted(OrderSort::Newest),
            )
            .await?;

        let total_revenue = transactions.iter().map(|t| t.order.price).sum();

        Ok(FinanceReport {
            transactions,
            total_revenue,
        })
    }
}
