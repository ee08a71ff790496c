use std::env;

use crate::modules::order::application::domain::entities::OrderStatus;

pub const DEFAULT_ADMIN_PHONE: &str = "088983483105";
pub const DEFAULT_PAYMENT_LINK_BASE: &str = "https://link.dana.id/sendmoney";

#[derive(Debug, Clone)]
pub struct OrderConfig {
    /// Flat fee in IDR before the unique code is added.
    pub base_price: i64,
    /// `PENDING` for the payment flow, `PAID` to skip it.
    pub initial_status: OrderStatus,
    pub admin_phone: String,
    pub payment_link_base: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            base_price: 0,
            initial_status: OrderStatus::Pending,
            admin_phone: DEFAULT_ADMIN_PHONE.to_string(),
            payment_link_base: DEFAULT_PAYMENT_LINK_BASE.to_string(),
        }
    }
}

impl OrderConfig {
    /// Reads `ORDER_BASE_PRICE`, `ORDER_INITIAL_STATUS`, `PAYMENT_ADMIN_PHONE`
    /// and `PAYMENT_LINK_BASE`. Panics on any invalid value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_price = lookup("ORDER_BASE_PRICE")
            .unwrap_or_else(|| "0".to_string())
            .trim()
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid ORDER_BASE_PRICE value"));

        if base_price < 0 {
            panic!("ORDER_BASE_PRICE must not be negative");
        }

        let initial_status = Self::parse_initial_status(
            &lookup("ORDER_INITIAL_STATUS").unwrap_or_else(|| "PENDING".to_string()),
        )
        .unwrap_or_else(|| panic!("ORDER_INITIAL_STATUS must be PENDING or PAID"));

        let admin_phone =
            lookup("PAYMENT_ADMIN_PHONE").unwrap_or_else(|| DEFAULT_ADMIN_PHONE.to_string());
        let payment_link_base = lookup("PAYMENT_LINK_BASE")
            .unwrap_or_else(|| DEFAULT_PAYMENT_LINK_BASE.to_string());

        if reqwest::Url::parse(&payment_link_base).is_err() {
            panic!("PAYMENT_LINK_BASE must be an absolute URL");
        }

        Self {
            base_price,
            initial_status,
            admin_phone,
            payment_link_base,
        }
    }

    fn parse_initial_status(raw: &str) -> Option<OrderStatus> {
        match raw.parse::<OrderStatus>() {
            Ok(status @ (OrderStatus::Pending | OrderStatus::Paid)) => Some(status),
            _ => None,
        }
    }
}
