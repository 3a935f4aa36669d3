//! Boundary diagnostics: what actually arrived on the wire.
//!
//! Exists so operators can tell "cookie never arrived" from "cookie arrived
//! but verification failed" without trusting client reports. No
//! authorization logic here, and the token value itself is never echoed.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::app::services::AppServices;
use crate::cookie::SESSION_COOKIE;

const REDACTED: &str = "[REDACTED]";

/// GET /auth/diagnostics — snapshot of request headers and cookies.
pub async fn snapshot(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let mut header_names: Vec<String> =
        headers.keys().map(|name| name.as_str().to_string()).collect();
    header_names.sort();
    header_names.dedup();

    let cookies: serde_json::Map<String, serde_json::Value> = jar
        .iter()
        .map(|c| {
            let value = if c.name() == SESSION_COOKIE {
                REDACTED.to_string()
            } else {
                c.value().to_string()
            };
            (c.name().to_string(), json!(value))
        })
        .collect();

    Json(json!({
        "headers": header_names,
        "cookies": cookies,
        "session_cookie_present": jar.get(SESSION_COOKIE).is_some(),
        "secret_configured": services.secret_configured,
    }))
}
