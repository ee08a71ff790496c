use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::OrderStatus;
use crate::modules::order::application::domain::payment::{payment_link, AUTO_PAYMENT_PROOF};
use crate::modules::order::application::order_config::OrderConfig;
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderError, CreateOrderInput, CreateOrderUseCase, CreatedOrder,
};
use crate::modules::order::application::ports::outgoing::{
    CreateOrderData, OrderRepository, PaymentCodeGenerator,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateOrderService<R>
where
    R: OrderRepository,
{
    order_repository: R,
    codes: Arc<dyn PaymentCodeGenerator>,
    config: OrderConfig,
}

impl<R> CreateOrderService<R>
where
    R: OrderRepository,
{
    pub fn new(order_repository: R, codes: Arc<dyn PaymentCodeGenerator>, config: OrderConfig) -> Self {
        Self {
            order_repository,
            codes,
            config,
        }
    }
}

#[async_trait]
impl<R> CreateOrderUseCase for CreateOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: CreateOrderInput,
    ) -> Result<CreatedOrder, CreateOrderError> {
        if !input.is_complete() {
            return Err(CreateOrderError::IncompleteOrder);
        }

        let status = self.config.initial_status;
        let payment_proof = (status == OrderStatus::Paid).then(|| AUTO_PAYMENT_PROOF.to_string());
        let price = self.config.base_price + self.codes.unique_code();

        // Built before the insert; a bad base must not leave a row behind
        let payment_link = payment_link(&self.config.payment_link_base, price, &self.config.admin_phone)
            .map_err(|e| {
                error!(owner = %owner, error = %e, "Failed to build payment link");
                CreateOrderError::PaymentLinkFailed(e.to_string())
            })?;

        let data = CreateOrderData {
            owner,
            student_name: input.student_name.trim().to_string(),
            student_id: input.student_id,
            university: input.university,
            program: input.program,
            semester: input.semester,
            task_link: input.task_link.trim().to_string(),
            sso_username: input.sso_username.unwrap_or_default(),
            sso_password: input.sso_password.unwrap_or_default(),
            course_name: input.course_name,
            title: input.title,
            instructions: input.instructions.unwrap_or_default(),
            status,
            price,
            payment_proof,
        };

        let order = self
            .order_repository
            .create_order(data)
            .await
            .map_err(|e| {
                error!(owner = %owner, error = %e, "Failed to create order");
                CreateOrderError::RepositoryError(e.to_string())
            })?;

        info!(order_id = %order.id, price = order.price, status = %order.status, "Order created");

        Ok(CreatedOrder {
            order,
            payment_link,
        })
    }
}
