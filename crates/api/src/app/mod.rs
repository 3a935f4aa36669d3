//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared request-handling dependencies (codec, directory)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use tillpoint_users::UserDirectory;

use crate::config::ApiConfig;
use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &ApiConfig, directory: Arc<dyn UserDirectory>) -> Router {
    let services = Arc::new(services::build_services(config, directory));
    let auth_state = middleware::AuthState {
        codec: services.codec.clone(),
    };

    // Routes behind the session resolver: a request only reaches these with
    // a verified Session in its extensions.
    let protected = Router::new()
        .route("/auth/verify", get(routes::auth::verify))
        .nest("/admin", routes::admin::router())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::session_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/auth/login", axum::routing::post(routes::auth::login))
        .route("/auth/logout", axum::routing::post(routes::auth::logout))
        .route("/auth/diagnostics", get(routes::diagnostics::snapshot))
        .merge(protected)
        .layer(Extension(services))
}
