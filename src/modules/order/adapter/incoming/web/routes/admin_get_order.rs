use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::order::application::ports::incoming::use_cases::AdminGetOrderError;
use crate::modules::order::application::ports::outgoing::OrderWithCustomer;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Full order detail, SSO credentials included, for the admin doing the work.
#[utoipa::path(
    get,
    path = "/api/admin/orders/{order_id}",
    tag = "admin",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with customer", body = inline(SuccessResponse<OrderWithCustomer>)),
        (status = 303, description = "Not signed in or not an admin; redirect", body = ErrorResponse),
        (status = 404, description = "No such order", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/orders/{order_id}")]
pub async fn admin_get_order_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.admin_get.execute(order_id).await {
        Ok(row) => ApiResponse::success(row),
        Err(AdminGetOrderError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(e) => {
            error!(%order_id, error = %e, "Admin order lookup failed");
            ApiResponse::internal_error()
        }
    }
}
