use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, OAuthError, OAuthProvider, TokenProvider, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::auth::application::use_cases::login_user::{issue_session, LoginUserResponse};

#[derive(Debug, Clone)]
pub enum GoogleLoginError {
    MissingCode,
    Provider(OAuthError),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for GoogleLoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoogleLoginError::MissingCode => write!(f, "Authorization code is required"),
            GoogleLoginError::Provider(e) => write!(f, "Google sign-in failed: {}", e),
            GoogleLoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            GoogleLoginError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GoogleLoginError {}

#[async_trait]
pub trait IGoogleLoginUseCase: Send + Sync {
    fn authorization_url(&self, state: &str) -> Result<String, GoogleLoginError>;
    async fn execute(&self, code: &str) -> Result<LoginUserResponse, GoogleLoginError>;
}

/// Signs a user in with a Google authorization code, creating the account on
/// first sight of the email. New accounts have no username or password.
pub struct GoogleLoginUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Arc<Q>,
    repository: Arc<R>,
    provider: Arc<dyn OAuthProvider>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> GoogleLoginUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Arc<Q>,
        repository: Arc<R>,
        provider: Arc<dyn OAuthProvider>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            provider,
            token_provider,
        }
    }

    async fn find_user(&self, email: &str) -> Result<Option<User>, GoogleLoginError> {
        self.query
            .find_by_email(email)
            .await
            .map(|found| found.map(User::from))
            .map_err(|e| GoogleLoginError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> IGoogleLoginUseCase for GoogleLoginUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    fn authorization_url(&self, state: &str) -> Result<String, GoogleLoginError> {
        self.provider
            .authorization_url(state)
            .map_err(GoogleLoginError::Provider)
    }

    async fn execute(&self, code: &str) -> Result<LoginUserResponse, GoogleLoginError> {
        if code.trim().is_empty() {
            return Err(GoogleLoginError::MissingCode);
        }

        let profile = self
            .provider
            .fetch_profile(code)
            .await
            .map_err(GoogleLoginError::Provider)?;

        let user = match self.find_user(&profile.email).await? {
            Some(user) => user,
            None => {
                let created = self
                    .repository
                    .create_user(CreateUserData {
                        email: profile.email.clone(),
                        username: None,
                        password_hash: None,
                        name: profile.name,
                        role: UserRole::User,
                    })
                    .await;

                match created {
                    Ok(user) => {
                        tracing::info!(user_id = %user.id, "User created from Google sign-in");
                        user
                    }
                    // Lost a race with a concurrent first login
                    Err(UserRepositoryError::UserAlreadyExists) => self
                        .find_user(&profile.email)
                        .await?
                        .ok_or_else(|| {
                            GoogleLoginError::RepositoryError(
                                "user vanished after conflict".to_string(),
                            )
                        })?,
                    Err(e) => return Err(GoogleLoginError::RepositoryError(e.to_string())),
                }
            }
        };

        issue_session(self.token_provider.as_ref(), user)
            .map_err(|e| GoogleLoginError::TokenGenerationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::OAuthProfile;
    use crate::auth::application::use_cases::test_doubles::{user, InMemoryUsers};

    struct FakeGoogle {
        profile: Result<OAuthProfile, OAuthError>,
    }

    #[async_trait]
    impl OAuthProvider for FakeGoogle {
        fn authorization_url(&self, state: &str) -> Result<String, OAuthError> {
            Ok(format!("https://accounts.example/auth?state={state}"))
        }

        async fn fetch_profile(&self, _code: &str) -> Result<OAuthProfile, OAuthError> {
            self.profile.clone()
        }
    }

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        }))
    }

    fn use_case(
        store: Arc<InMemoryUsers>,
        profile: Result<OAuthProfile, OAuthError>,
    ) -> GoogleLoginUseCase<InMemoryUsers, InMemoryUsers> {
        GoogleLoginUseCase::new(
            store.clone(),
            store,
            Arc::new(FakeGoogle { profile }),
            tokens(),
        )
    }

    fn profile(email: &str) -> OAuthProfile {
        OAuthProfile {
            email: email.to_string(),
            name: Some("Gilang Ramadhan".to_string()),
        }
    }

    #[tokio::test]
    async fn test_first_google_login_creates_user_without_credentials() {
        let store = Arc::new(InMemoryUsers::default());
        let res = use_case(store.clone(), Ok(profile("gilang@gmail.com")))
            .execute("auth-code")
            .await
            .unwrap();

        let users = store.snapshot();
        assert_eq!(users.len(), 1);
        assert!(users[0].username.is_none());
        assert!(users[0].password_hash.is_none());
        assert_eq!(users[0].name.as_deref(), Some("Gilang Ramadhan"));
        assert!(res.profile_incomplete);
    }

    #[tokio::test]
    async fn test_google_login_reuses_existing_account() {
        let existing = user("siti@gmail.com", Some("siti"), Some("pw"), UserRole::Admin);
        let store = Arc::new(InMemoryUsers::with(vec![existing.clone()]));

        let res = use_case(store.clone(), Ok(profile("siti@gmail.com")))
            .execute("auth-code")
            .await
            .unwrap();

        assert_eq!(res.user.id, existing.id);
        assert_eq!(res.user.role, UserRole::Admin);
        assert!(!res.profile_incomplete);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_google_login_provider_failure() {
        let store = Arc::new(InMemoryUsers::default());
        let err = use_case(
            store,
            Err(OAuthError::CodeExchangeFailed("invalid_grant".to_string())),
        )
        .execute("stale-code")
        .await
        .unwrap_err();

        assert!(matches!(err, GoogleLoginError::Provider(_)));
    }

    #[tokio::test]
    async fn test_google_login_requires_code() {
        let store = Arc::new(InMemoryUsers::default());
        let err = use_case(store, Ok(profile("x@gmail.com")))
            .execute("")
            .await
            .unwrap_err();
        assert!(matches!(err, GoogleLoginError::MissingCode));
    }

    #[test]
    fn test_authorization_url_passes_state() {
        let uc = use_case(Arc::new(InMemoryUsers::default()), Ok(profile("x@gmail.com")));
        let url = uc.authorization_url("abc123").unwrap();
        assert!(url.ends_with("state=abc123"));
    }
}
