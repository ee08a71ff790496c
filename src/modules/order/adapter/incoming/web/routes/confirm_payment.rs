use actix_web::{post, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentInput, PaymentConfirmation,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Finish the simulated wallet payment for an order
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/payment/confirm",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = ConfirmPaymentInput,
    responses(
        (status = 200, description = "Order marked paid", body = inline(SuccessResponse<PaymentConfirmation>)),
        (status = 400, description = "PIN is not six digits", body = ErrorResponse),
        (status = 404, description = "No such order for this user", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/orders/{order_id}/payment/confirm")]
pub async fn confirm_payment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ConfirmPaymentInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order
        .confirm_payment
        .execute(user.id(), order_id, req.into_inner())
        .await
    {
        Ok(confirmation) => ApiResponse::success(confirmation),

        Err(e @ ConfirmPaymentError::InvalidPin) => {
            ApiResponse::bad_request("INVALID_PIN", &e.to_string())
        }

        Err(ConfirmPaymentError::NotFound) => {
            warn!(user_id = %user.user_id, %order_id, "Payment for unknown or foreign order");
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(e) => {
            error!(%order_id, error = %e, "Payment confirmation failed");
            ApiResponse::internal_error()
        }
    }
}
