use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use tillpoint_auth::TokenCodec;

use crate::app::errors;
use crate::resolve::{ResolveError, resolve};

#[derive(Clone)]
pub struct AuthState {
    pub codec: Arc<TokenCodec>,
}

/// Resolve the session cookie and make the [`tillpoint_auth::Session`]
/// available to handlers as a request extension.
///
/// Every failure collapses to the same 401 body; the distinguishing reason
/// stays in the logs so a rejected credential is not confused with a caller
/// that never logged in.
pub async fn session_middleware(
    State(state): State<AuthState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    match resolve(&jar, &state.codec, Utc::now()) {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(ResolveError::NoToken) => {
            tracing::debug!("unauthenticated request (no session cookie)");
            errors::unauthorized()
        }
        Err(ResolveError::Invalid(reason)) => {
            tracing::warn!(%reason, "session token rejected");
            errors::unauthorized()
        }
    }
}
