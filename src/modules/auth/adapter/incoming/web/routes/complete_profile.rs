use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, DASHBOARD_PAGE};
use crate::auth::application::use_cases::complete_profile::{
    CompleteProfileError, CompleteProfileRequest,
};
use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Accounts created through Google sign-in pick a username and password here.
#[utoipa::path(
    post,
    path = "/api/auth/complete-profile",
    tag = "auth",
    request_body(
        content = Object,
        example = json!({ "username": "siti", "password": "rahasia123" })
    ),
    responses(
        (status = 200, description = "Profile completed"),
        (status = 303, description = "Profile already complete, go to the dashboard", body = ErrorResponse),
        (status = 400, description = "Username or password missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 409, description = "Username taken", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/auth/complete-profile")]
pub async fn complete_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<CompleteProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .complete_profile_use_case
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(CompleteProfileError::AlreadyCompleted) => ApiResponse::see_other(
            DASHBOARD_PAGE,
            "PROFILE_ALREADY_COMPLETE",
            "Profile is already complete",
        ),

        Err(e @ CompleteProfileError::MissingFields) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e @ CompleteProfileError::UsernameTaken) => {
            warn!(user_id = %user.user_id, "Username already taken");
            ApiResponse::conflict("USERNAME_TAKEN", &e.to_string())
        }

        Err(CompleteProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Completing profile failed");
            ApiResponse::internal_error()
        }
    }
}
