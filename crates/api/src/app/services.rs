use std::sync::Arc;

use chrono::Duration;

use tillpoint_auth::TokenCodec;
use tillpoint_users::UserDirectory;

use crate::config::ApiConfig;

/// Request-handling dependencies, built once and shared via `Extension`.
pub struct AppServices {
    pub codec: Arc<TokenCodec>,
    pub directory: Arc<dyn UserDirectory>,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
    /// Reported by the diagnostics snapshot; derived from the config rather
    /// than hardcoded so the snapshot stays honest if the startup invariant
    /// ever changes.
    pub secret_configured: bool,
}

pub fn build_services(config: &ApiConfig, directory: Arc<dyn UserDirectory>) -> AppServices {
    AppServices {
        codec: Arc::new(TokenCodec::new(config.token_secret.as_bytes())),
        directory,
        session_ttl: config.session_ttl,
        secure_cookies: config.secure_cookies,
        secret_configured: !config.token_secret.trim().is_empty(),
    }
}
