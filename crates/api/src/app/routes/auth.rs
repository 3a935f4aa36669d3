//! Login, logout, and session verification.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use tillpoint_auth::Session;

use crate::app::{errors, services::AppServices};
use crate::cookie;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login — mint a session token and set the cookie.
///
/// This is the only place the user directory is consulted; every subsequent
/// request is authenticated from the token alone.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Response {
    let Some(user) = services.directory.authenticate(&body.email, &body.password) else {
        tracing::debug!(email = %body.email, "login rejected");
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid email or password",
        );
    };

    let token = match services.codec.issue(
        user.id,
        &user.name,
        &user.email,
        user.role,
        services.session_ttl,
    ) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "could not issue session token");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_issue_failed",
                "could not create session",
            );
        }
    };

    tracing::info!(subject = %user.id, role = %user.role, "session issued");

    let jar = cookie::issue_cookie(jar, token, services.session_ttl, services.secure_cookies);
    (
        jar,
        Json(json!({
            "user": {
                "id": user.id.to_string(),
                "name": user.name,
                "email": user.email,
                "role": user.role.as_str(),
            },
        })),
    )
        .into_response()
}

/// POST /auth/logout — expire the session cookie.
///
/// Stateless tokens cannot be revoked server-side; logout only clears the
/// browser's copy.
pub async fn logout(jar: CookieJar) -> Response {
    (cookie::clear_cookie(jar), StatusCode::NO_CONTENT).into_response()
}

/// GET /auth/verify — report the verified session back to the caller.
///
/// Reaching this handler at all means the resolver accepted the cookie; the
/// 401 path lives in the middleware.
pub async fn verify(Extension(session): Extension<Session>) -> impl IntoResponse {
    Json(json!({
        "user": {
            "id": session.subject_id.to_string(),
            "name": session.name,
            "email": session.email,
            "role": session.role.as_str(),
        },
        "authenticated": true,
    }))
}
