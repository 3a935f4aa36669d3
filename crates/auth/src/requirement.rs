use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// What a protected operation demands of the caller.
///
/// Built by the route/UI boundary right before the authorization check and
/// never persisted. One tagged type instead of ad hoc `if` checks per call
/// site keeps the decision surface testable in one place ([`crate::guard`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Authenticated caller, no further constraint.
    None,
    /// Caller's role must be exactly this role.
    Role(Role),
    /// Caller's role must hold this permission.
    Permission(Permission),
    /// Caller's role must hold every listed permission.
    AllOf(Vec<Permission>),
    /// Caller's role must hold at least one listed permission.
    AnyOf(Vec<Permission>),
}

impl AccessRequirement {
    pub fn role(role: Role) -> Self {
        AccessRequirement::Role(role)
    }

    pub fn permission(permission: Permission) -> Self {
        AccessRequirement::Permission(permission)
    }

    pub fn all_of(permissions: impl Into<Vec<Permission>>) -> Self {
        AccessRequirement::AllOf(permissions.into())
    }

    pub fn any_of(permissions: impl Into<Vec<Permission>>) -> Self {
        AccessRequirement::AnyOf(permissions.into())
    }
}
