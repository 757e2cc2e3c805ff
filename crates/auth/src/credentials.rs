use std::collections::HashMap;

/// A credential table entry: stable subject id, shared-secret password, and
/// granted roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub password: String,
    pub roles: Vec<String>,
}

/// Lookup capability mapping a username to its credential record.
///
/// Injected into `TokenService` so the credential source stays swappable
/// (static table today, a directory-backed store later).
pub trait CredentialStore: Send + Sync {
    fn find(&self, username: &str) -> Option<UserRecord>;
}

/// Fixed in-memory credential table.
///
/// Immutable after construction, so it is safe to share across concurrent
/// requests without locking.
#[derive(Debug, Default)]
pub struct StaticCredentialStore {
    users: HashMap<String, UserRecord>,
}

impl StaticCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two demo accounts seeded in every service environment.
    pub fn with_demo_users() -> Self {
        let mut store = Self::new();
        store.insert(
            "user1",
            UserRecord {
                id: "u1".to_string(),
                password: "pass1".to_string(),
                roles: vec!["customer".to_string()],
            },
        );
        store.insert(
            "user2",
            UserRecord {
                id: "u2".to_string(),
                password: "pass2".to_string(),
                roles: vec!["customer".to_string()],
            },
        );
        store
    }

    pub fn insert(&mut self, username: impl Into<String>, record: UserRecord) {
        self.users.insert(username.into(), record);
    }
}

impl CredentialStore for StaticCredentialStore {
    fn find(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }
}
