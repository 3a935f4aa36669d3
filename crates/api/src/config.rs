//! Process configuration, read once at startup.
//!
//! A missing signing secret is a fatal startup condition. There is
//! deliberately no development fallback: a guessable default secret makes
//! every issued session forgeable.

use chrono::Duration;
use thiserror::Error;

/// Environment variable holding the token signing secret.
pub const SECRET_ENV: &str = "TILLPOINT_TOKEN_SECRET";
/// Session TTL in seconds (default 24h).
pub const TTL_ENV: &str = "TILLPOINT_SESSION_TTL_SECS";
/// Set to `1`/`true` to mark session cookies `Secure` (TLS deployments).
pub const SECURE_COOKIES_ENV: &str = "TILLPOINT_SECURE_COOKIES";
/// Socket address to bind.
pub const BIND_ENV: &str = "TILLPOINT_BIND";

const DEFAULT_TTL_SECS: i64 = 86_400;
const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{SECRET_ENV} is not set; refusing to start without a signing secret")]
    MissingSecret,

    #[error("{TTL_ENV} is not a positive integer: '{0}'")]
    InvalidTtl(String),
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token_secret: String,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
    pub bind_addr: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name→value lookup. `from_env` delegates here; tests
    /// pass a closure instead of mutating process environment.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let token_secret = lookup(SECRET_ENV)
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let session_ttl = match lookup(TTL_ENV) {
            Some(raw) => parse_ttl(&raw)?,
            None => Duration::seconds(DEFAULT_TTL_SECS),
        };

        let secure_cookies = lookup(SECURE_COOKIES_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let bind_addr = lookup(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            token_secret,
            session_ttl,
            secure_cookies,
            bind_addr,
        })
    }
}

fn parse_ttl(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::seconds)
        .ok_or_else(|| ConfigError::InvalidTtl(raw.to_string()))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
