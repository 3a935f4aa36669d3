use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Atomic capability a caller may or may not hold.
///
/// Like [`crate::Role`], permissions are a closed set. Extending the system
/// means adding a variant here and a matrix row in [`crate::matrix`] —
/// nothing else grants capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// View data (catalog, sales history, dashboards).
    Read,
    /// Create/update/delete operational data.
    Write,
    /// Administrative operations (user management, configuration).
    Admin,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized permission '{0}'")]
pub struct PermissionParseError(pub String);

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            "admin" => Ok(Permission::Admin),
            other => Err(PermissionParseError(other.to_string())),
        }
    }
}
