// src/modules/order/application/ports/outgoing/order_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateOrderData {
    pub owner: UserId,
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
    pub price: i64,
    pub payment_proof: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Write-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, data: CreateOrderData) -> Result<Order, OrderRepositoryError>;

    /// Unconditional: any status may replace any other.
    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError>;

    /// Owner-scoped. Marks the order `PAID` with the given proof.
    async fn record_payment(
        &self,
        order_id: Uuid,
        owner: UserId,
        payment_proof: String,
    ) -> Result<Order, OrderRepositoryError>;
}
