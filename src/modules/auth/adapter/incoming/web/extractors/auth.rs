use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::shared::api::ApiResponse;

pub const LOGIN_PAGE: &str = "/login";
pub const DASHBOARD_PAGE: &str = "/dashboard";

/// Any signed-in user, customer or admin.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

enum AccessTokenFailure {
    NoProvider,
    MissingHeader,
    WrongType,
    Invalid,
}

fn access_claims(req: &HttpRequest) -> Result<TokenClaims, AccessTokenFailure> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or(AccessTokenFailure::NoProvider)?;

    let token = extract_token_from_header(req).ok_or(AccessTokenFailure::MissingHeader)?;

    jwt_service
        .verify_access_token(&token)
        .map_err(|e| match e {
            TokenError::WrongTokenType { .. } => AccessTokenFailure::WrongType,
            _ => AccessTokenFailure::Invalid,
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match access_claims(req) {
            Ok(claims) => Ok(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role,
            }),
            Err(AccessTokenFailure::NoProvider) => {
                Err(create_api_error(ApiResponse::internal_error()))
            }
            Err(AccessTokenFailure::MissingHeader) => Err(create_api_error(
                ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ),
            )),
            Err(AccessTokenFailure::WrongType) => Err(create_api_error(
                ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type"),
            )),
            Err(AccessTokenFailure::Invalid) => Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            ))),
        };

        ready(result)
    }
}

/// Gate for the admin pages. Instead of 401/403 it answers the way the
/// pages do: visitors go to the login page, customers to their dashboard.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match access_claims(req) {
            Ok(claims) if claims.role.is_admin() => Ok(AdminUser {
                user_id: claims.sub,
            }),
            Ok(claims) => {
                tracing::warn!(user_id = %claims.sub, "Non-admin attempted to open an admin page");
                Err(create_api_error(ApiResponse::see_other(
                    DASHBOARD_PAGE,
                    "ADMIN_ONLY",
                    "Admin access required",
                )))
            }
            Err(AccessTokenFailure::NoProvider) => {
                Err(create_api_error(ApiResponse::internal_error()))
            }
            Err(_) => Err(create_api_error(ApiResponse::see_other(
                LOGIN_PAGE,
                "LOGIN_REQUIRED",
                "Please sign in first",
            ))),
        };

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
