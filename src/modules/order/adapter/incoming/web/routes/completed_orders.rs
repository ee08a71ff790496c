use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::order::application::ports::outgoing::OrderWithCustomer;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Finished orders, most recently updated first
#[utoipa::path(
    get,
    path = "/api/admin/completed",
    tag = "admin",
    responses(
        (status = 200, description = "Completed orders", body = inline(SuccessResponse<Vec<OrderWithCustomer>>)),
        (status = 303, description = "Not signed in or not an admin; redirect", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/completed")]
pub async fn completed_orders_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.completed.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!(error = %e, "Completed orders list failed");
            ApiResponse::internal_error()
        }
    }
}
