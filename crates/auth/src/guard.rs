//! Authorization guard: one table-driven decision function.
//!
//! The guard is pure and produces only a verdict — rendering a 401/403 or a
//! UI fallback from a [`Decision::Deny`] is the caller's job. That keeps the
//! same function usable from API handlers and server-rendered views alike.

use crate::matrix::has_permission;
use crate::{AccessRequirement, Session};

/// Authorization verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        self == Decision::Allow
    }
}

/// Evaluate `requirement` against an optionally-present session.
///
/// Fail-closed: no session denies everything, and an empty permission set
/// denies under both combinators — an accidentally empty `AllOf` must not
/// become an allow-all.
pub fn authorize(session: Option<&Session>, requirement: &AccessRequirement) -> Decision {
    let Some(session) = session else {
        return Decision::Deny;
    };

    let allowed = match requirement {
        AccessRequirement::None => true,
        AccessRequirement::Role(role) => session.role == *role,
        AccessRequirement::Permission(permission) => has_permission(session.role, *permission),
        AccessRequirement::AllOf(permissions) => {
            !permissions.is_empty()
                && permissions.iter().all(|p| has_permission(session.role, *p))
        }
        AccessRequirement::AnyOf(permissions) => {
            permissions.iter().any(|p| has_permission(session.role, *p))
        }
    };

    if allowed { Decision::Allow } else { Decision::Deny }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::{Permission, Role, SubjectId};

    fn session(role: Role) -> Session {
        let now = Utc::now();
        Session {
            subject_id: SubjectId::new(),
            name: "Test Clerk".to_string(),
            email: "clerk@example.com".to_string(),
            role,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    #[test]
    fn absent_session_denies_everything() {
        let requirements = [
            AccessRequirement::None,
            AccessRequirement::role(Role::Admin),
            AccessRequirement::permission(Permission::Read),
            AccessRequirement::all_of([Permission::Read]),
            AccessRequirement::any_of([Permission::Read]),
        ];
        for requirement in requirements {
            assert_eq!(authorize(None, &requirement), Decision::Deny);
        }
    }

    #[test]
    fn no_requirement_allows_any_authenticated_caller() {
        let s = session(Role::User);
        assert_eq!(authorize(Some(&s), &AccessRequirement::None), Decision::Allow);
    }

    #[test]
    fn role_requirement_is_an_exact_match() {
        let s = session(Role::Admin);
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::role(Role::Admin)),
            Decision::Allow
        );
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::role(Role::User)),
            Decision::Deny
        );
    }

    #[test]
    fn single_permission_goes_through_the_matrix() {
        let s = session(Role::User);
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::permission(Permission::Read)),
            Decision::Allow
        );
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::permission(Permission::Write)),
            Decision::Deny
        );
    }

    #[test]
    fn manager_against_read_admin_set_splits_on_combinator() {
        // manager holds {read, write}; requirement is {read, admin}.
        let s = session(Role::Manager);
        let set = [Permission::Read, Permission::Admin];

        assert_eq!(
            authorize(Some(&s), &AccessRequirement::all_of(set)),
            Decision::Deny
        );
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::any_of(set)),
            Decision::Allow
        );
    }

    #[test]
    fn empty_permission_sets_deny_under_both_combinators() {
        let s = session(Role::Admin);
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::AllOf(Vec::new())),
            Decision::Deny
        );
        assert_eq!(
            authorize(Some(&s), &AccessRequirement::AnyOf(Vec::new())),
            Decision::Deny
        );
    }
}
