//! API-side adapter for the authorization guard.
//!
//! The guard itself only returns a verdict; this is where a `Deny` becomes
//! an HTTP 403. Handlers call [`require`] before doing any work.

use axum::response::Response;

use tillpoint_auth::{AccessRequirement, Decision, Session, authorize};

use crate::app::errors;

/// Enforce an access requirement at a route boundary.
pub fn require(
    session: Option<&Session>,
    requirement: &AccessRequirement,
) -> Result<(), Response> {
    match authorize(session, requirement) {
        Decision::Allow => Ok(()),
        Decision::Deny => {
            if let Some(session) = session {
                tracing::debug!(
                    subject = %session.subject_id,
                    role = %session.role,
                    ?requirement,
                    "authorization denied"
                );
            }
            Err(errors::forbidden())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use tillpoint_auth::{Permission, Role, SubjectId};

    fn session(role: Role) -> Session {
        let now = Utc::now();
        Session {
            subject_id: SubjectId::new(),
            name: "Test".to_string(),
            email: "test@tillpoint.test".to_string(),
            role,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    #[test]
    fn allow_passes_through() {
        let s = session(Role::Admin);
        assert!(require(Some(&s), &AccessRequirement::permission(Permission::Admin)).is_ok());
    }

    #[test]
    fn deny_becomes_a_403_response() {
        let s = session(Role::User);
        let response =
            require(Some(&s), &AccessRequirement::permission(Permission::Admin)).unwrap_err();
        assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
    }
}
