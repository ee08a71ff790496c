use std::env;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository,
};

/// Credentials for the first admin account, read from the environment.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl AdminAccount {
    /// Returns `None` unless `ADMIN_EMAIL`, `ADMIN_USERNAME` and
    /// `ADMIN_PASSWORD` are all set and non-empty.
    pub fn from_env() -> Option<Self> {
        let read = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        Some(Self {
            email: read("ADMIN_EMAIL")?,
            username: read("ADMIN_USERNAME")?,
            password: read("ADMIN_PASSWORD")?,
        })
    }
}

#[derive(Debug)]
pub enum BootstrapOutcome {
    AlreadyPresent,
    Created(User),
}

#[derive(Debug, Clone)]
pub enum BootstrapAdminError {
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for BootstrapAdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapAdminError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            BootstrapAdminError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for BootstrapAdminError {}

/// Creates the configured admin account if no user owns its email yet.
/// An existing account is left untouched, whatever its role.
pub struct BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Arc<Q>,
    repository: Arc<R>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> BootstrapAdminUseCase<Q, R>
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

    pub async fn execute(
        &self,
        account: AdminAccount,
    ) -> Result<BootstrapOutcome, BootstrapAdminError> {
        let existing = self
            .query
            .find_by_email(&account.email)
            .await
            .map_err(|e| BootstrapAdminError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&account.password)
            .await
            .map_err(|e| BootstrapAdminError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email: account.email,
                username: Some(account.username.clone()),
                password_hash: Some(password_hash),
                name: Some(account.username),
                role: UserRole::Admin,
            })
            .await
            .map_err(|e| BootstrapAdminError::RepositoryError(e.to_string()))?;

        Ok(BootstrapOutcome::Created(user))
    }
}
