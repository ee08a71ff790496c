use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

use tracing::{error, info, warn};

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body(
        content = Object,
        example = json!({ "refresh_token": "eyJhbGciOiJIUzI1NiJ9..." })
    ),
    responses(
        (status = 200, description = "New access token"),
        (status = 400, description = "Refresh token missing", body = ErrorResponse),
        (status = 401, description = "Expired or invalid refresh token", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Token refresh attempt");

    match data.refresh_token_use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),

        Err(RefreshTokenError::MissingToken) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Refresh token is required")
        }

        Err(RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: Token expired");
            ApiResponse::unauthorized(
                "TOKEN_EXPIRED",
                "Refresh token has expired. Please login again.",
            )
        }

        Err(RefreshTokenError::InvalidToken(reason)) => {
            warn!(reason = %reason, "Token refresh failed: Invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::UserNotFound) => {
            warn!("Token refresh failed: user no longer exists");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(e) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
