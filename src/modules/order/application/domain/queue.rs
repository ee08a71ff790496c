use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Orders the service works through per day.
pub const DAILY_CAPACITY: u64 = 20;

/// Days until an order at `position` is done. Position `0` means the order
/// is not in the queue.
pub fn estimated_days(position: u64) -> u64 {
    if position == 0 {
        return 0;
    }
    position.div_ceil(DAILY_CAPACITY)
}

/// 1-based position behind `earlier_active` orders.
pub fn queue_position(earlier_active: u64) -> u64 {
    earlier_active + 1
}

pub fn estimated_completion(now: DateTime<Utc>, days: u64) -> DateTime<Utc> {
    now + Duration::days(days as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct QueueInfo {
    pub next_queue_number: u64,
    pub estimated_days: u64,
}

impl QueueInfo {
    pub fn from_active_count(active: u64) -> Self {
        let next_queue_number = queue_position(active);
        Self {
            next_queue_number,
            estimated_days: estimated_days(next_queue_number),
        }
    }

    /// Shown when the active count cannot be read.
    pub fn fallback() -> Self {
        Self {
            next_queue_number: 1,
            estimated_days: 1,
        }
    }
}
