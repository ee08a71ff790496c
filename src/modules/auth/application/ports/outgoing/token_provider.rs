use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Expected a {expected} token, got {found}")]
    WrongTokenType { expected: TokenType, found: TokenType },
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT payload. `role` is read at login or refresh time, so a role change
/// reaches the client with its next refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: TokenType,
    pub role: UserRole,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, user_id: Uuid, role: UserRole)
        -> Result<String, TokenError>;
    /// Checks signature, issuer and time window; any token type passes.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        expect_type(self.verify_token(token)?, TokenType::Access)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        expect_type(self.verify_token(token)?, TokenType::Refresh)
    }
}

fn expect_type(claims: TokenClaims, expected: TokenType) -> Result<TokenClaims, TokenError> {
    if claims.token_type == expected {
        Ok(claims)
    } else {
        Err(TokenError::WrongTokenType {
            expected,
            found: claims.token_type,
        })
    }
}
