pub mod google_oauth_client;
pub mod google_oauth_config;

pub use google_oauth_client::GoogleOAuthClient;
pub use google_oauth_config::GoogleOAuthConfig;
