use std::env;

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ACCESS_EXPIRY: i64 = 1800;
const DEFAULT_REFRESH_EXPIRY: i64 = 604_800;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds
    pub access_token_expiry: i64,
    /// Seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER`, `JWT_ACCESS_EXPIRY` and
    /// `JWT_REFRESH_EXPIRY`. Panics on a missing or weak secret and on
    /// inconsistent lifetimes; the server must not start with either.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret_key = lookup("JWT_SECRET").expect("JWT_SECRET must be set");
        if secret_key.len() < MIN_SECRET_LEN {
            panic!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256");
        }

        let seconds = |key: &str, default: i64| match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .unwrap_or_else(|_| panic!("Invalid {} value", key)),
            None => default,
        };

        let access_token_expiry = seconds("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY);
        let refresh_token_expiry = seconds("JWT_REFRESH_EXPIRY", DEFAULT_REFRESH_EXPIRY);

        if !(1..=MAX_ACCESS_EXPIRY).contains(&access_token_expiry) {
            panic!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY} seconds");
        }
        if refresh_token_expiry <= access_token_expiry {
            panic!("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY");
        }

        Self {
            secret_key,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "jasatugas".to_string()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
