use async_trait::async_trait;
use tracing::warn;

use crate::modules::order::application::domain::entities::OrderStatus;
use crate::modules::order::application::domain::queue::QueueInfo;
use crate::modules::order::application::ports::incoming::use_cases::GetQueueInfoUseCase;
use crate::modules::order::application::ports::outgoing::OrderQuery;

pub struct GetQueueInfoService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> GetQueueInfoService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQueueInfoUseCase for GetQueueInfoService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self) -> QueueInfo {
        match self.query.count_by_status(&OrderStatus::ACTIVE, None).await {
            Ok(active) => QueueInfo::from_active_count(active),
            Err(e) => {
                warn!(error = %e, "Queue count unavailable, using fallback");
                QueueInfo::fallback()
            }
        }
    }
}
