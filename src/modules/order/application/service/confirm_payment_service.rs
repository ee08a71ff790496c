use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::payment::simulated_payment_proof;
use crate::modules::order::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentInput, ConfirmPaymentUseCase, PaymentConfirmation,
};
use crate::modules::order::application::ports::outgoing::{
    OrderRepository, OrderRepositoryError, PaymentCodeGenerator,
};

pub struct ConfirmPaymentService<R>
where
    R: OrderRepository,
{
    order_repository: R,
    codes: Arc<dyn PaymentCodeGenerator>,
}

impl<R> ConfirmPaymentService<R>
where
    R: OrderRepository,
{
    pub fn new(order_repository: R, codes: Arc<dyn PaymentCodeGenerator>) -> Self {
        Self {
            order_repository,
            codes,
        }
    }
}

#[async_trait]
impl<R> ConfirmPaymentUseCase for ConfirmPaymentService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        order_id: Uuid,
        input: ConfirmPaymentInput,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError> {
        if !input.has_valid_pin() {
            return Err(ConfirmPaymentError::InvalidPin);
        }

        let proof = simulated_payment_proof(self.codes.simulation_reference());

        // Works from any status, which is how UNPAID orders get back to PAID.
        let order = self
            .order_repository
            .record_payment(order_id, owner, proof)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::NotFound => ConfirmPaymentError::NotFound,
                OrderRepositoryError::DatabaseError(msg) => {
                    error!(%order_id, error = %msg, "Failed to record payment");
                    ConfirmPaymentError::RepositoryError(msg)
                }
            })?;

        info!(%order_id, "Payment recorded");

        Ok(PaymentConfirmation {
            redirect_to: format!("/dashboard/status/{}?success=true", order.id),
            order,
        })
    }
}
