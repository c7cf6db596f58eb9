//! Environment-driven configuration.
//!
//! Everything is read once at startup. Invalid values panic immediately:
//! a misconfigured server should die before it binds a socket, not limp
//! along with defaults it was explicitly told not to use.

use std::fmt::Display;
use std::str::FromStr;

/// Read an env var, parsing into `T`, with a fallback for the unset case.
///
/// # Panics
///
/// Panics when the variable is set but does not parse.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} has an invalid value ({raw:?}): {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping surrounding whitespace
/// and empty entries.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Token signing secret and lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days.
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// `JWT_SECRET` is required and must be non-empty. Lifetimes come
    /// from `JWT_ACCESS_EXPIRY_MINS` (default 15) and
    /// `JWT_REFRESH_EXPIRY_DAYS` (default 7).
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            access_token_expiry_mins: env_or("JWT_ACCESS_EXPIRY_MINS", 15),
            refresh_token_expiry_days: env_or("JWT_REFRESH_EXPIRY_DAYS", 7),
        }
    }
}

/// Top-level server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Defaults suit local development: `HOST` 0.0.0.0, `PORT` 3000,
    /// `CORS_ORIGINS` pointing at the Vite dev server,
    /// `REQUEST_TIMEOUT_SECS` 30.
    pub fn from_env() -> Self {
        let raw_origins =
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into());

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins: split_origins(&raw_origins),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_skips_empties() {
        assert_eq!(
            split_origins(" http://a.example , ,http://b.example,"),
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        assert!(split_origins("").is_empty());
    }
}
