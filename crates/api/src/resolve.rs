//! Session resolver: cookie transport composed with the token codec.

use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use thiserror::Error;

use tillpoint_auth::{Session, TokenCodec, TokenError};

/// Why a request has no session.
///
/// `NoToken` ("never logged in") and `Invalid` ("tampered or stale
/// credential") are operationally different events; the split exists for
/// server-side logs only and is never surfaced to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no session cookie on request")]
    NoToken,

    #[error("session token rejected: {0}")]
    Invalid(#[from] TokenError),
}

/// Produce a verified [`Session`] from request cookies, or a typed failure.
pub fn resolve(
    jar: &CookieJar,
    codec: &TokenCodec,
    now: DateTime<Utc>,
) -> Result<Session, ResolveError> {
    let token = crate::cookie::read(jar).ok_or(ResolveError::NoToken)?;
    Ok(codec.verify(&token, now)?)
}
