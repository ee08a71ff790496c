use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Sets username and password for an account that was created without them.
    async fn set_credentials(
        &self,
        user_id: Uuid,
        username: String,
        password_hash: String,
    ) -> Result<User, UserRepositoryError>;
}
