//! Signed session token codec (HS256).
//!
//! The codec is stateless: verification is a pure function of
//! (token, secret, current time). There is no session store and no
//! revocation list — a token's freshness rests entirely on its TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roles::RoleParseError;
use crate::{Role, Session, SubjectId};

/// Why a token failed to verify.
///
/// Every failure mode is distinguished so the boundary can log diagnostics,
/// even though clients only ever see a uniform 401.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token encoding could not be parsed")]
    Malformed,

    #[error("token signature mismatch")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token carries unrecognized role '{0}'")]
    RoleUnrecognized(String),

    #[error("failed to sign token")]
    Signing,
}

/// Wire-level claim set. Role travels as a string so an unrecognized role in
/// an otherwise valid token is reported as its own failure, not a parse error.
#[derive(Debug, Serialize, Deserialize)]
struct RawClaims {
    sub: SubjectId,
    name: String,
    email: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies signed session tokens over a process-wide secret.
///
/// Construct once at startup and share read-only; all methods take `&self`
/// and touch no state beyond the keys.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller-supplied clock in `verify`,
        // not against the library's ambient system time.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for the given identity, expiring `ttl` from now.
    pub fn issue(
        &self,
        subject_id: SubjectId,
        name: &str,
        email: &str,
        role: Role,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_at(Utc::now(), subject_id, name, email, role, ttl)
    }

    /// Issue with an explicit clock. Timestamps are second-granular.
    pub fn issue_at(
        &self,
        now: DateTime<Utc>,
        subject_id: SubjectId,
        name: &str,
        email: &str,
        role: Role,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = RawClaims {
            sub: subject_id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            TokenError::Signing
        })
    }

    /// Verify a token and reconstruct the [`Session`] it carries.
    ///
    /// Signature is checked before any claim is interpreted; an expired
    /// token is rejected even when its signature is valid. `now >= exp`
    /// counts as expired, so a zero-TTL token is dead on arrival.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Session, TokenError> {
        let data =
            decode::<RawClaims>(token, &self.decoding, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                    _ => TokenError::Malformed,
                }
            })?;

        let claims = data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        let role: Role = claims
            .role
            .parse()
            .map_err(|RoleParseError(name)| TokenError::RoleUnrecognized(name))?;

        let issued_at =
            DateTime::from_timestamp(claims.iat, 0).ok_or(TokenError::Malformed)?;
        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(Session {
            subject_id: claims.sub,
            name: claims.name,
            email: claims.email,
            role,
            issued_at,
            expires_at,
        })
    }
}
