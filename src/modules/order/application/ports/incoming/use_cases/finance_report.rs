use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::order::application::ports::outgoing::{OrderQueryError, OrderWithCustomer};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FinanceReport {
    pub transactions: Vec<OrderWithCustomer>,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FinanceReportError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrderQueryError> for FinanceReportError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::DatabaseError(msg) => FinanceReportError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait FinanceReportUseCase: Send + Sync {
    async fn execute(&self) -> Result<FinanceReport, FinanceReportError>;
}
