//! Role→permission matrix: the single source of truth for what a role may do.
//!
//! The matrix is a total `match` over the closed [`Role`] enum, so there is
//! no initialization step, no fallible lookup, and no runtime mutation —
//! every role has a fixed, non-empty permission set from process start.

use crate::{Permission, Role};

/// Permissions granted to a role.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &[Permission::Read, Permission::Write, Permission::Admin],
        Role::Manager => &[Permission::Read, Permission::Write],
        Role::User => &[Permission::Read],
    }
}

/// Whether `role` holds `permission` under the matrix.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}
