use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "siti")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "siti@kampus.ac.id")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "rahasia123")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "siti")]
    username: Option<String>,
    #[schema(example = "siti@kampus.ac.id")]
    email: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::MissingFields | RegisterUserError::InvalidEmail => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        RegisterUserError::UserAlreadyExists => {
            warn!(username = %req.username, email = %req.email, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", &err.to_string())
        }

        other => {
            error!(email = %req.email, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new customer account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisteredUser>)),
        (
            status = 400,
            description = "Missing field or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Semua field wajib diisi" }
            })
        ),
        (status = 409, description = "Email or username already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, email = %req.email, "User registration attempt");

    let input = RegisterUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.register_user_use_case.execute(input).await {
        Ok(user) => ApiResponse::created(RegisteredUser {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }),
        Err(e) => map_register_error(e, &req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{User, UserRole};
    use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use uuid::Uuid;

    /* --------------------------------------------------
     * Mock Register Use Case
     * -------------------------------------------------- */
    struct MockRegister {
        result: Result<(), RegisterUserError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegister {
        async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
            self.result.clone().map(|_| User {
                id: Uuid::new_v4(),
                email: input.email,
                username: Some(input.username.clone()),
                password_hash: Some("hash".to_string()),
                name: Some(input.username),
                role: UserRole::User,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn call(result: Result<(), RegisterUserError>, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_register_created() {
        let (status, body) = call(
            Ok(()),
            json!({"username": "siti", "email": "siti@kampus.ac.id", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["username"], "siti");
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_register_missing_fields() {
        let (status, body) = call(
            Err(RegisterUserError::MissingFields),
            json!({"username": "siti"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Semua field wajib diisi");
    }

    #[actix_web::test]
    async fn test_register_conflict() {
        let (status, body) = call(
            Err(RegisterUserError::UserAlreadyExists),
            json!({"username": "siti", "email": "siti@kampus.ac.id", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_register_repository_error_is_hidden() {
        let (status, body) = call(
            Err(RegisterUserError::RepositoryError("pool timed out".to_string())),
            json!({"username": "siti", "email": "siti@kampus.ac.id", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
