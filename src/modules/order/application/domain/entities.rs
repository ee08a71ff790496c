use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle: `DRAFT -> PENDING -> PAID -> PROCESSED -> COMPLETED`, with
/// `UNPAID` as the rejection branch that a new payment brings back to `PAID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Draft,
    Pending,
    Paid,
    Processed,
    Completed,
    Unpaid,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Draft,
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Processed,
        OrderStatus::Completed,
        OrderStatus::Unpaid,
    ];

    /// Statuses that occupy a queue slot.
    pub const ACTIVE: [OrderStatus; 2] = [OrderStatus::Paid, OrderStatus::Processed];

    /// Statuses counted as received money.
    pub const REVENUE: [OrderStatus; 3] = [
        OrderStatus::Paid,
        OrderStatus::Processed,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "DRAFT",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Processed => "PROCESSED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Unpaid => "UNPAID",
        }
    }

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }

    /// Orders still waiting for their first payment have no queue slot yet.
    pub fn awaits_payment(&self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Order
// ──────────────────────────────────────────────────────────
//

/// SSO credentials are kept as entered so the worker can sign in to the
/// campus portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_name: String,
    pub student_id: String,
    pub university: String,
    pub program: String,
    pub semester: String,
    pub task_link: String,
    pub sso_username: String,
    pub sso_password: String,
    pub course_name: String,
    pub title: String,
    pub instructions: String,
    pub status: OrderStatus,
    /// IDR, base price plus the unique code.
    pub price: i64,
    pub payment_proof: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// List filters
// ──────────────────────────────────────────────────────────
//

/// Tabs on the customer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerOrderFilter {
    #[default]
    All,
    Pending,
    Process,
    Completed,
}

impl CustomerOrderFilter {
    /// Unknown or missing values fall back to `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("pending") => CustomerOrderFilter::Pending,
            Some("process") => CustomerOrderFilter::Process,
            Some("completed") => CustomerOrderFilter::Completed,
            _ => CustomerOrderFilter::All,
        }
    }

    /// `None` means no status restriction.
    pub fn statuses(&self) -> Option<Vec<OrderStatus>> {
        match self {
            CustomerOrderFilter::All => None,
            CustomerOrderFilter::Pending => Some(vec![OrderStatus::Pending]),
            CustomerOrderFilter::Process => Some(OrderStatus::ACTIVE.to_vec()),
            CustomerOrderFilter::Completed => Some(vec![OrderStatus::Completed]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminOrderFilter {
    #[default]
    All,
    /// Work to be done today: the active queue.
    Today,
}

impl AdminOrderFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("today") => AdminOrderFilter::Today,
            _ => AdminOrderFilter::All,
        }
    }
}
