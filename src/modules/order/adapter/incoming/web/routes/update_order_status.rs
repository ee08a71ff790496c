use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::incoming::use_cases::UpdateOrderStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// One of `DRAFT`, `PENDING`, `PAID`, `PROCESSED`, `COMPLETED`, `UNPAID`
    #[schema(example = "PROCESSED")]
    #[serde(default)]
    pub status: String,
}

/// Set an order's status (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/orders/{order_id}/status",
    tag = "admin",
    params(("order_id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = inline(SuccessResponse<Order>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/orders/{order_id}/status")]
pub async fn update_order_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateOrderStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    let status = match req.status.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(e) => {
            warn!(%order_id, error = %e, "Rejected unknown order status");
            return ApiResponse::bad_request("INVALID_STATUS", &e.to_string());
        }
    };

    match data
        .order
        .update_status
        .execute(user.role, order_id, status)
        .await
    {
        Ok(order) => ApiResponse::success(order),

        Err(e @ UpdateOrderStatusError::Unauthorized) => {
            ApiResponse::forbidden("UNAUTHORIZED", &e.to_string())
        }

        Err(UpdateOrderStatusError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }

        Err(e) => {
            error!(%order_id, error = %e, "Status update failed");
            ApiResponse::internal_error_with("STATUS_UPDATE_FAILED", "Gagal update status")
        }
    }
}
