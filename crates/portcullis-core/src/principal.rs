//! Principals and their topic permissions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default client id constraint: alphanumeric plus `-` and `_`.
pub const DEFAULT_CLIENT_ID_PATTERN: &str = "^[0-9a-zA-Z-_]+$";

/// Normalize a username for storage, lookup, and comparison.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A named entity permitted to connect to the broker.
///
/// `Debug` redacts the stored password hash so principals can appear in
/// tracing output.
#[derive(Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Identity assigned by the administrative layer
    pub id: Uuid,

    /// Unique, case-normalized username
    pub username: String,

    /// Self-describing PHC hash string (`$<alg>$<params>$<salt>$<digest>`)
    pub password_hash: String,

    /// Regex constraining acceptable client ids; `None` or blank disables
    /// the check
    #[serde(default = "default_client_id_pattern")]
    pub client_id_pattern: Option<String>,

    /// Disabled principals are treated as unknown
    pub enabled: bool,

    /// Whether topics are rewritten into [`base_topic`](Self::base_topic)
    pub rewrite_enabled: bool,

    /// Namespace prefix; meaningful only when rewriting is enabled
    pub base_topic: Option<String>,

    /// Access rules, unique per `(principal, topic_template)`
    pub permissions: Vec<Permission>,
}

fn default_client_id_pattern() -> Option<String> {
    Some(DEFAULT_CLIENT_ID_PATTERN.to_owned())
}

impl Principal {
    /// Create an enabled principal with the default client id pattern and no
    /// permissions.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: normalize_username(&username.into()),
            password_hash: password_hash.into(),
            client_id_pattern: default_client_id_pattern(),
            enabled: true,
            rewrite_enabled: false,
            base_topic: None,
            permissions: Vec::new(),
        }
    }

    /// Replace the permission set.
    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Confine the principal to a base-topic namespace.
    pub fn with_base_topic(mut self, base_topic: impl Into<String>) -> Self {
        self.rewrite_enabled = true;
        self.base_topic = Some(base_topic.into());
        self
    }

    /// Constrain acceptable client ids; `None` disables the check.
    pub fn with_client_id_pattern(mut self, pattern: Option<String>) -> Self {
        self.client_id_pattern = pattern;
        self
    }
}

impl std::fmt::Debug for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("client_id_pattern", &self.client_id_pattern)
            .field("enabled", &self.enabled)
            .field("rewrite_enabled", &self.rewrite_enabled)
            .field("base_topic", &self.base_topic)
            .field("permissions", &self.permissions)
            .finish()
    }
}

/// One access rule: a topic template plus independent read/write grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Topic filter, may contain `+` and `#` wildcard segments
    pub topic_template: String,

    /// Whether subscriptions matching the template are allowed
    pub can_read: bool,

    /// Whether publishes matching the template are allowed
    pub can_write: bool,
}

impl Permission {
    /// Read-only rule.
    pub fn read(topic_template: impl Into<String>) -> Self {
        Self {
            topic_template: topic_template.into(),
            can_read: true,
            can_write: false,
        }
    }

    /// Write-only rule.
    pub fn write(topic_template: impl Into<String>) -> Self {
        Self {
            topic_template: topic_template.into(),
            can_read: false,
            can_write: true,
        }
    }

    /// Rule granting both directions.
    pub fn read_write(topic_template: impl Into<String>) -> Self {
        Self {
            topic_template: topic_template.into(),
            can_read: true,
            can_write: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_are_trimmed_and_lowercased() {
        assert_eq!(normalize_username("  Alice "), "alice");
        assert_eq!(normalize_username("BOB"), "bob");
        assert_eq!(normalize_username("carol"), "carol");
    }

    #[test]
    fn new_principal_normalizes_username_and_defaults() {
        let principal = Principal::new(" MiXeD ", "$argon2id$stub");
        assert_eq!(principal.username, "mixed");
        assert!(principal.enabled);
        assert!(!principal.rewrite_enabled);
        assert_eq!(
            principal.client_id_pattern.as_deref(),
            Some(DEFAULT_CLIENT_ID_PATTERN)
        );
    }

    #[test]
    fn debug_redacts_password_hash() {
        let principal = Principal::new("alice", "$argon2id$very-secret");
        let rendered = format!("{principal:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn missing_client_id_pattern_deserializes_to_default() {
        let principal: Principal = serde_json::from_value(serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "username": "alice",
            "password_hash": "$argon2id$stub",
            "enabled": true,
            "rewrite_enabled": false,
            "base_topic": null,
            "permissions": [],
        }))
        .unwrap();
        assert_eq!(
            principal.client_id_pattern.as_deref(),
            Some(DEFAULT_CLIENT_ID_PATTERN)
        );
    }

    #[test]
    fn permission_constructors_set_grants() {
        assert!(Permission::read("a/b").can_read);
        assert!(!Permission::read("a/b").can_write);
        assert!(Permission::write("a/b").can_write);
        assert!(!Permission::write("a/b").can_read);
        let both = Permission::read_write("a/#");
        assert!(both.can_read && both.can_write);
    }
}
