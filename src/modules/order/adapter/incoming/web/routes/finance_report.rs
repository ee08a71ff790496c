use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::order::application::ports::incoming::use_cases::FinanceReport;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Paid transactions and their total
#[utoipa::path(
    get,
    path = "/api/admin/finance",
    tag = "admin",
    responses(
        (status = 200, description = "Transactions and revenue", body = inline(SuccessResponse<FinanceReport>)),
        (status = 303, description = "Not signed in or not an admin; redirect", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/finance")]
pub async fn finance_report_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.order.finance_report.execute().await {
        Ok(report) => ApiResponse::success(report),
        Err(e) => {
            error!(error = %e, "Finance report failed");
            ApiResponse::internal_error()
        }
    }
}
