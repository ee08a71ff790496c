use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::order::application::domain::entities::AdminOrderFilter;
use crate::modules::order::application::ports::outgoing::OrderWithCustomer;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminFilterQuery {
    pub filter: Option<String>,
}

/// All orders with their customer
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = "admin",
    params(("filter" = Option<String>, Query, description = "`today` for the active queue; anything else lists all")),
    responses(
        (status = 200, description = "Orders with customer", body = inline(SuccessResponse<Vec<OrderWithCustomer>>)),
        (status = 303, description = "Not signed in or not an admin; redirect", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/orders")]
pub async fn admin_list_orders_handler(
    admin: AdminUser,
    query: web::Query<AdminFilterQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = AdminOrderFilter::parse(query.filter.as_deref());

    match data.order.admin_list.execute(filter).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!(admin_id = %admin.user_id, error = %e, "Admin order list failed");
            ApiResponse::internal_error()
        }
    }
}
