use async_trait::async_trait;

use crate::modules::order::application::domain::queue::QueueInfo;

/// Never fails: a read error yields `QueueInfo::fallback()`.
#[async_trait]
pub trait GetQueueInfoUseCase: Send + Sync {
    async fn execute(&self) -> QueueInfo;
}
