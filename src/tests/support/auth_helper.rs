use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "jasatugas".to_string(),
        secret_key: "test_secret_key_for_testing_only".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// Same type the server registers as app data for the extractors.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// `Authorization` header carrying a fresh access token.
pub fn bearer(user_id: Uuid, role: UserRole) -> (&'static str, String) {
    let token = create_test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("test token");
    ("Authorization", format!("Bearer {}", token))
}
