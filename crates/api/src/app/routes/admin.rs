//! Admin-gated RBAC inspection.
//!
//! Answers "who can do what" from the permission matrix, for operators
//! debugging a denial. Gated on the `admin` permission, which also makes
//! this the end-to-end exercise of the guard's deny path.

use axum::{
    Json,
    extract::Extension,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use tillpoint_auth::{AccessRequirement, Permission, Role, Session, permissions_for};

use crate::authz;

pub fn router() -> Router {
    Router::new().route("/rbac", get(rbac_matrix))
}

/// GET /admin/rbac — dump the role→permission matrix.
pub async fn rbac_matrix(Extension(session): Extension<Session>) -> Response {
    if let Err(denied) = authz::require(
        Some(&session),
        &AccessRequirement::permission(Permission::Admin),
    ) {
        return denied;
    }

    let roles: Vec<_> = Role::ALL
        .iter()
        .map(|role| {
            json!({
                "role": role.as_str(),
                "permissions": permissions_for(*role)
                    .iter()
                    .map(Permission::as_str)
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    Json(json!({ "roles": roles })).into_response()
}
