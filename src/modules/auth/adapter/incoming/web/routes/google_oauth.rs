use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::google_login::GoogleLoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const OAUTH_STATE_COOKIE: &str = "oauth_state";
const OAUTH_COOKIE_PATH: &str = "/api/auth/google";

fn not_configured() -> HttpResponse {
    ApiResponse::service_unavailable("OAUTH_NOT_CONFIGURED", "Google sign-in is not configured")
}

fn new_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Redirects the browser to Google's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/google",
    tag = "auth",
    responses(
        (status = 302, description = "Redirect to Google with a state cookie set"),
        (status = 503, description = "Google sign-in not configured", body = ErrorResponse),
    )
)]
#[get("/api/auth/google")]
pub async fn google_login_handler(data: web::Data<AppState>) -> impl Responder {
    let Some(use_case) = &data.google_login_use_case else {
        return not_configured();
    };

    let state = new_state();
    match use_case.authorization_url(&state) {
        Ok(url) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .cookie(
                Cookie::build(OAUTH_STATE_COOKIE, state)
                    .path(OAUTH_COOKIE_PATH)
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .max_age(CookieDuration::minutes(10))
                    .finish(),
            )
            .finish(),
        Err(e) => {
            error!(error = %e, "Building Google authorization URL failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Google redirects back here with the authorization code
#[utoipa::path(
    get,
    path = "/api/auth/google/callback",
    tag = "auth",
    params(
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "Must match the state cookie"),
        ("error" = Option<String>, Query, description = "Set when the user declined"),
    ),
    responses(
        (status = 200, description = "Access and refresh tokens"),
        (status = 400, description = "State mismatch or missing code", body = ErrorResponse),
        (status = 401, description = "Sign-in cancelled", body = ErrorResponse),
        (status = 502, description = "Google rejected the code", body = ErrorResponse),
        (status = 503, description = "Google sign-in not configured", body = ErrorResponse),
    )
)]
#[get("/api/auth/google/callback")]
pub async fn google_callback_handler(
    req: HttpRequest,
    query: web::Query<GoogleCallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(use_case) = &data.google_login_use_case else {
        return not_configured();
    };

    if let Some(reason) = &query.error {
        warn!(reason = %reason, "Google sign-in was denied");
        return ApiResponse::unauthorized("OAUTH_DENIED", "Google sign-in was cancelled");
    }

    let cookie_state = req.cookie(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());
    match (&cookie_state, &query.state) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => {
            warn!("Google callback with missing or mismatched state");
            return ApiResponse::bad_request("INVALID_OAUTH_STATE", "OAuth state mismatch");
        }
    }

    let code = query.code.clone().unwrap_or_default();
    match use_case.execute(&code).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User signed in with Google");
            let mut response = ApiResponse::success(session);
            let removal = Cookie::build(OAUTH_STATE_COOKIE, "")
                .path(OAUTH_COOKIE_PATH)
                .finish();
            if let Err(e) = response.add_removal_cookie(&removal) {
                warn!(error = %e, "Could not clear OAuth state cookie");
            }
            response
        }
        Err(e @ GoogleLoginError::MissingCode) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(GoogleLoginError::Provider(e)) => {
            warn!(error = %e, "Google rejected the sign-in");
            ApiResponse::error(
                actix_web::http::StatusCode::BAD_GATEWAY,
                "OAUTH_PROVIDER_ERROR",
                "Google sign-in failed",
            )
        }
        Err(e) => {
            error!(error = %e, "Google sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
