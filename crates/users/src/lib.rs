//! `tillpoint-users` — user-lookup collaborator for the auth boundary.
//!
//! The session path never touches this crate per request; a directory is
//! consulted exactly once, at login, to mint a token. Credential storage and
//! hashing policy belong to directory implementations, not to callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tillpoint_auth::{Role, SubjectId};

/// Identity record as the directory knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: SubjectId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// User-lookup capability consumed at login time.
pub trait UserDirectory: Send + Sync {
    /// Validate credentials; `None` covers both unknown email and bad
    /// password so callers cannot tell the cases apart.
    fn authenticate(&self, email: &str, password: &str) -> Option<UserRecord>;

    fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    fn find_by_id(&self, id: SubjectId) -> Option<UserRecord>;
}

/// In-memory directory for tests and local runs.
///
/// Stores passwords in the clear; do not use outside fixtures.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    by_email: HashMap<String, (UserRecord, String)>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, record: UserRecord, password: &str) -> Self {
        self.by_email
            .insert(record.email.clone(), (record, password.to_string()));
        self
    }

    /// Fixture with one account per role, password `"pos"` for all.
    pub fn demo() -> Self {
        let user = |name: &str, email: &str, role| UserRecord {
            id: SubjectId::new(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };

        Self::new()
            .with_user(user("Ada Admin", "ada@tillpoint.test", Role::Admin), "pos")
            .with_user(user("Mori Manager", "mori@tillpoint.test", Role::Manager), "pos")
            .with_user(user("Uma Clerk", "uma@tillpoint.test", Role::User), "pos")
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn authenticate(&self, email: &str, password: &str) -> Option<UserRecord> {
        let (record, stored) = self.by_email.get(email)?;
        if stored == password {
            Some(record.clone())
        } else {
            None
        }
    }

    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.by_email.get(email).map(|(record, _)| record.clone())
    }

    fn find_by_id(&self, id: SubjectId) -> Option<UserRecord> {
        self.by_email
            .values()
            .find(|(record, _)| record.id == id)
            .map(|(record, _)| record.clone())
    }
}
