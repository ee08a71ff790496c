use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

// ========================= Register Input =========================
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ========================= Register Error =========================
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterUserError {
    MissingFields,
    InvalidEmail,
    UserAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterUserError::MissingFields => write!(f, "Semua field wajib diisi"),
            RegisterUserError::InvalidEmail => write!(f, "Format email tidak valid"),
            RegisterUserError::UserAlreadyExists => {
                write!(f, "Email atau username sudah terdaftar")
            }
            RegisterUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

// ========================= Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Arc<Q>,
    repository: Arc<R>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Arc<Q>, repository: Arc<R>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        let username = input.username.trim().to_string();
        let email = input.email.trim().to_string();

        if username.is_empty() || email.is_empty() || input.password.is_empty() {
            return Err(RegisterUserError::MissingFields);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        let email_taken = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some();
        let username_taken = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some();

        if email_taken || username_taken {
            return Err(RegisterUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email,
                username: Some(username.clone()),
                password_hash: Some(password_hash),
                name: Some(username),
                role: UserRole::User,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
