//! The principal-store collaborator seam.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use portcullis_core::{normalize_username, PortcullisError, Principal, Result};

/// Read access to principals plus the narrow rehash write-back.
///
/// Implementations own their storage and its concurrency; the dispatcher
/// performs one lookup per hook and, occasionally, one hash write.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync {
    /// Look up an enabled principal by normalized username.
    ///
    /// Disabled principals are filtered here, so callers cannot distinguish
    /// missing from disabled.
    async fn find_principal(&self, username: &str) -> Result<Option<Principal>>;

    /// Persist an upgraded password hash for a principal.
    ///
    /// Callers treat this as best-effort; a failure must not change an
    /// authentication outcome that was already computed.
    async fn persist_password_hash(&self, username: &str, new_hash: &str) -> Result<()>;
}

/// In-memory directory for tests and embedded deployments.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    principals: RwLock<HashMap<String, Principal>>,
}

impl MemoryDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a principal, keyed by normalized username.
    pub fn upsert(&self, mut principal: Principal) {
        principal.username = normalize_username(&principal.username);
        self.principals
            .write()
            .insert(principal.username.clone(), principal);
    }

    /// Snapshot a principal regardless of enabled state (admin view).
    pub fn get(&self, username: &str) -> Option<Principal> {
        self.principals
            .read()
            .get(&normalize_username(username))
            .cloned()
    }
}

#[async_trait]
impl PrincipalDirectory for MemoryDirectory {
    async fn find_principal(&self, username: &str) -> Result<Option<Principal>> {
        let principals = self.principals.read();
        Ok(principals
            .get(&normalize_username(username))
            .filter(|principal| principal.enabled)
            .cloned())
    }

    async fn persist_password_hash(&self, username: &str, new_hash: &str) -> Result<()> {
        let mut principals = self.principals.write();
        match principals.get_mut(&normalize_username(username)) {
            Some(principal) => {
                principal.password_hash = new_hash.to_owned();
                Ok(())
            }
            None => Err(PortcullisError::not_found(format!(
                "no principal '{username}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_normalizes_and_filters_disabled() {
        let directory = MemoryDirectory::new();
        directory.upsert(Principal::new("Alice", "$argon2id$stub"));

        let mut bob = Principal::new("bob", "$argon2id$stub");
        bob.enabled = false;
        directory.upsert(bob);

        assert!(directory.find_principal("  ALICE ").await.unwrap().is_some());
        assert!(directory.find_principal("bob").await.unwrap().is_none());
        assert!(directory.get("bob").is_some());
    }

    #[tokio::test]
    async fn persisting_a_hash_replaces_the_stored_one() {
        let directory = MemoryDirectory::new();
        directory.upsert(Principal::new("alice", "$pbkdf2-sha256$old"));

        directory
            .persist_password_hash("alice", "$argon2id$new")
            .await
            .unwrap();
        assert_eq!(
            directory.get("alice").map(|p| p.password_hash),
            Some("$argon2id$new".to_owned())
        );

        let err = directory
            .persist_password_hash("ghost", "$argon2id$new")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
