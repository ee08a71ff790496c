use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    MissingToken,
    TokenExpired,
    InvalidToken(String),
    UserNotFound,
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::MissingToken => write!(f, "Refresh token is required"),
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::InvalidToken(msg) => write!(f, "Invalid refresh token: {}", msg),
            RefreshTokenError::UserNotFound => write!(f, "User no longer exists"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

/// Re-reads the user so a role change takes effect on the next refresh.
pub struct RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    query: Arc<Q>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Arc<Q>, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> IRefreshTokenUseCase for RefreshTokenUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let token = request.refresh_token.trim();
        if token.is_empty() {
            return Err(RefreshTokenError::MissingToken);
        }

        let claims = self
            .token_provider
            .verify_refresh_token(token)
            .map_err(|e| match e {
                TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                other => RefreshTokenError::InvalidToken(other.to_string()),
            })?;

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::UserNotFound)?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshTokenResponse { access_token })
    }
}
