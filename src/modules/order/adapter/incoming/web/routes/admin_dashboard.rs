use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::order::application::domain::entities::AdminOrderFilter;
use crate::modules::order::application::ports::incoming::use_cases::AdminDashboard;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub filter: Option<String>,
}

/// Queue overview with revenue
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    params(("filter" = Option<String>, Query, description = "`today` for the active queue; anything else lists all")),
    responses(
        (status = 200, description = "Active count, revenue and queue", body = inline(SuccessResponse<AdminDashboard>)),
        (status = 303, description = "Not signed in or not an admin; redirect", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/dashboard")]
pub async fn admin_dashboard_handler(
    _admin: AdminUser,
    query: web::Query<DashboardQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = AdminOrderFilter::parse(query.filter.as_deref());

    match data.order.admin_dashboard.execute(filter).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!(error = %e, "Admin dashboard failed");
            ApiResponse::internal_error()
        }
    }
}
