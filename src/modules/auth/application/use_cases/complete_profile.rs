use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CompleteProfileRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompleteProfileError {
    MissingFields,
    UserNotFound,
    AlreadyCompleted,
    UsernameTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for CompleteProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompleteProfileError::MissingFields => write!(f, "Username dan password wajib diisi"),
            CompleteProfileError::UserNotFound => write!(f, "User not found"),
            CompleteProfileError::AlreadyCompleted => write!(f, "Profile is already complete"),
            CompleteProfileError::UsernameTaken => write!(f, "Username sudah dipakai"),
            CompleteProfileError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            CompleteProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CompleteProfileError {}

#[async_trait]
pub trait ICompleteProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: CompleteProfileRequest,
    ) -> Result<User, CompleteProfileError>;
}

pub struct CompleteProfileUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Arc<Q>,
    repository: Arc<R>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> CompleteProfileUseCase<Q, R>
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
impl<Q, R> ICompleteProfileUseCase for CompleteProfileUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: CompleteProfileRequest,
    ) -> Result<User, CompleteProfileError> {
        let username = request.username.trim().to_string();
        if username.is_empty() || request.password.is_empty() {
            return Err(CompleteProfileError::MissingFields);
        }

        let current = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| CompleteProfileError::RepositoryError(e.to_string()))?
            .ok_or(CompleteProfileError::UserNotFound)?;

        if current.username.is_some() {
            return Err(CompleteProfileError::AlreadyCompleted);
        }

        if self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| CompleteProfileError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(CompleteProfileError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| CompleteProfileError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .set_credentials(user_id, username, password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CompleteProfileError::UsernameTaken,
                UserRepositoryError::UserNotFound => CompleteProfileError::UserNotFound,
                other => CompleteProfileError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Profile completed");
        Ok(user)
    }
}
