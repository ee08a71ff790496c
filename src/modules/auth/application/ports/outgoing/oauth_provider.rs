use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OAuthError {
    #[error("Invalid OAuth configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Authorization code exchange failed: {0}")]
    CodeExchangeFailed(String),

    #[error("Fetching the user profile failed: {0}")]
    ProfileFetchFailed(String),

    #[error("Provider did not return a verified email")]
    MissingEmail,
}

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    fn authorization_url(&self, state: &str) -> Result<String, OAuthError>;
    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthError>;
}
