use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::Order;

//
// ──────────────────────────────────────────────────────────
// Input / Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateOrderInput {
    pub student_name: String,
    pub student_id: String,
    pub university: String,
    pub program: String,
    pub semester: String,
    pub task_link: String,
    pub sso_username: Option<String>,
    pub sso_password: Option<String>,
    pub course_name: String,
    pub title: String,
    pub instructions: Option<String>,
}

impl CreateOrderInput {
    /// Only the task link and the student's name are mandatory.
    pub fn is_complete(&self) -> bool {
        !self.task_link.trim().is_empty() && !self.student_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedOrder {
    pub order: Order,
    /// Wallet deep link prefilled with the order price.
    pub payment_link: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOrderError {
    IncompleteOrder,
    PaymentLinkFailed(String),
    RepositoryError(String),
}

impl fmt::Display for CreateOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateOrderError::IncompleteOrder => {
                write!(f, "Data tugas tidak lengkap. Harap isi form dengan benar.")
            }
            CreateOrderError::PaymentLinkFailed(msg) => write!(f, "payment link error: {}", msg),
            CreateOrderError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: CreateOrderInput,
    ) -> Result<CreatedOrder, CreateOrderError>;
}
