use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::Order;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ConfirmPaymentInput {
    /// Typed into the wallet PIN screen. Checked for shape only.
    pub pin: String,
}

impl ConfirmPaymentInput {
    pub fn has_valid_pin(&self) -> bool {
        self.pin.len() == 6 && self.pin.bytes().all(|b| b.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentConfirmation {
    pub order: Order,
    pub redirect_to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmPaymentError {
    InvalidPin,
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ConfirmPaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmPaymentError::InvalidPin => write!(f, "PIN harus 6 digit angka"),
            ConfirmPaymentError::NotFound => write!(f, "order not found"),
            ConfirmPaymentError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ConfirmPaymentUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        order_id: Uuid,
        input: ConfirmPaymentInput,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError>;
}
