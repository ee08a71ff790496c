use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::ports::incoming::use_cases::{
    GetOrderStatusError, OrderStatusView,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Status page of one of the caller's orders
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with queue estimate", body = inline(SuccessResponse<OrderStatusView>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such order for this user", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/orders/{order_id}")]
pub async fn get_order_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.get_status.execute(user.id(), order_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetOrderStatusError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(e) => {
            error!(%order_id, error = %e, "Loading order status failed");
            ApiResponse::internal_error()
        }
    }
}
