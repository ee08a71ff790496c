use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::ports::incoming::use_cases::{
    CreateOrderError, CreateOrderInput, CreatedOrder,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit a new homework order
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderInput,
    responses(
        (status = 201, description = "Order created", body = inline(SuccessResponse<CreatedOrder>)),
        (status = 400, description = "Task link or student name missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Order could not be saved", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/orders")]
pub async fn create_order_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateOrderInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.create.execute(user.id(), req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(e @ CreateOrderError::IncompleteOrder) => {
            ApiResponse::bad_request("INCOMPLETE_ORDER", &e.to_string())
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Order creation failed");
            ApiResponse::internal_error_with(
                "ORDER_CREATE_FAILED",
                "Gagal menyimpan order. Silakan coba lagi nanti.",
            )
        }
    }
}
