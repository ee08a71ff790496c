use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::auth::application::ports::outgoing::oauth_provider::{
    OAuthError, OAuthProfile, OAuthProvider,
};

use super::google_oauth_config::GoogleOAuthConfig;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<bool>,
    name: Option<String>,
}

/// Authorization-code flow against Google's OpenID Connect endpoints.
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, OAuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| OAuthError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { config, http })
    }

    async fn exchange_code(&self, code: &str) -> Result<String, OAuthError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| OAuthError::CodeExchangeFailed(e.to_string()))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuthError::CodeExchangeFailed(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorization_url(&self, state: &str) -> Result<String, OAuthError> {
        let url = Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", "openid email profile"),
                ("state", state),
            ],
        )
        .map_err(|e| OAuthError::InvalidConfiguration(e.to_string()))?;

        Ok(url.to_string())
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthError> {
        let access_token = self.exchange_code(code).await?;

        let info: UserInfoResponse = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| OAuthError::ProfileFetchFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthError::ProfileFetchFailed(e.to_string()))?;

        if info.email_verified == Some(false) {
            return Err(OAuthError::MissingEmail);
        }

        let email = info
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or(OAuthError::MissingEmail)?;

        Ok(OAuthProfile {
            email,
            name: info.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleOAuthClient {
        GoogleOAuthClient::new(GoogleOAuthConfig::new(
            "client-123.apps.googleusercontent.com".to_string(),
            "shh".to_string(),
            "http://localhost:8080/api/auth/google/callback".to_string(),
        ))
        .unwrap()
    }

    #[test]
    fn test_authorization_url_contains_flow_parameters() {
        let url = client().authorization_url("xyz789").unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(pairs.contains(&("state".to_string(), "xyz789".to_string())));
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8080/api/auth/google/callback".to_string()
        )));
    }

    #[test]
    fn test_authorization_url_with_broken_base() {
        let mut config = GoogleOAuthConfig::new("id".into(), "secret".into(), "cb".into());
        config.auth_url = "not a url".to_string();
        let client = GoogleOAuthClient::new(config).unwrap();

        assert!(matches!(
            client.authorization_url("s"),
            Err(OAuthError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn test_code_exchange_failure_is_reported() {
        let mut config = GoogleOAuthConfig::new("id".into(), "secret".into(), "cb".into());
        // Nothing listens on port 9 locally
        config.token_url = "http://127.0.0.1:9/token".to_string();
        let client = GoogleOAuthClient::new(config).unwrap();

        assert!(matches!(
            client.fetch_profile("code").await,
            Err(OAuthError::CodeExchangeFailed(_))
        ));
    }
}
