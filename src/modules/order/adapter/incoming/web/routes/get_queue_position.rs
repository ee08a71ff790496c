use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::domain::queue::estimated_days;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct QueuePosition {
    queue_position: u64,
    estimated_days: u64,
}

/// Place of an order in the work queue
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/queue-position",
    tag = "orders",
    params(("order_id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Position and day estimate; 0 for an unknown order", body = inline(SuccessResponse<QueuePosition>)),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/orders/{order_id}/queue-position")]
pub async fn get_queue_position_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.order.queue_position.execute(order_id).await {
        Ok(position) => ApiResponse::success(QueuePosition {
            queue_position: position,
            estimated_days: estimated_days(position),
        }),
        Err(e) => {
            error!(user_id = %user.user_id, %order_id, error = %e, "Queue position lookup failed");
            ApiResponse::internal_error()
        }
    }
}
