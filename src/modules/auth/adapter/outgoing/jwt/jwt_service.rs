use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenType,
};

use super::jwt_config::JwtConfig;

/// Clock skew tolerated on `exp` and `nbf`, in seconds.
const LEEWAY_SECS: u64 = 30;

/// HS256 signer for session tokens.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn lifetime(&self, token_type: TokenType) -> Duration {
        match token_type {
            TokenType::Access => Duration::seconds(self.config.access_token_expiry),
            TokenType::Refresh => Duration::seconds(self.config.refresh_token_expiry),
        }
    }

    fn issue(
        &self,
        user_id: Uuid,
        role: UserRole,
        token_type: TokenType,
    ) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user_id,
            exp: (now + self.lifetime(token_type)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type,
            role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }
}

fn classify(err: JwtError) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => {
            debug!("Rejected expired token");
            TokenError::TokenExpired
        }
        ErrorKind::ImmatureSignature => {
            warn!("Rejected token used before its nbf");
            TokenError::TokenNotYetValid
        }
        // A foreign issuer is treated like a forged signature
        ErrorKind::InvalidSignature | ErrorKind::InvalidIssuer => {
            error!(kind = ?err.kind(), "Rejected token with bad signature or issuer");
            TokenError::InvalidSignature
        }
        kind => {
            warn!(?kind, "Rejected malformed token");
            TokenError::MalformedToken
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        self.issue(user_id, role, TokenType::Access)
    }

    fn generate_refresh_token(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<String, TokenError> {
        self.issue(user_id, role, TokenType::Refresh)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims)
            .map_err(classify)
    }
}
