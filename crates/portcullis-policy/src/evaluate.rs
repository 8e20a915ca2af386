//! Permission evaluation against a principal's access rules.

use portcullis_core::{Permission, Principal};

use crate::rewrite::rewrite;
use crate::topic::template_matches;

/// The kind of access a hook asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Subscription / message delivery
    Read,
    /// Publishing
    Write,
}

impl Access {
    fn granted_by(self, permission: &Permission) -> bool {
        match self {
            Access::Read => permission.can_read,
            Access::Write => permission.can_write,
        }
    }
}

/// Find the rule granting `access` on `topic`, if any.
///
/// Both the topic and every stored template are rewritten into the
/// principal's namespace before matching, so the comparison always happens
/// in the rewritten namespace. Blank templates are ignored. When several
/// rules match, the one with the longest template is returned; existence is
/// all the boolean wrappers care about.
pub fn matching_permission<'a>(
    principal: &'a Principal,
    topic: &str,
    access: Access,
) -> Option<&'a Permission> {
    let topic = rewrite(principal, topic);

    principal
        .permissions
        .iter()
        .filter(|permission| access.granted_by(permission))
        .filter(|permission| !permission.topic_template.trim().is_empty())
        .filter(|permission| {
            let template = rewrite(principal, &permission.topic_template);
            template_matches(&template, &topic)
        })
        .max_by_key(|permission| permission.topic_template.len())
}

/// True iff some rule grants read access to `topic`.
///
/// The topic is rewritten internally; rewrite idempotence makes this safe for
/// callers that already rewrote it.
pub fn can_read(principal: &Principal, topic: &str) -> bool {
    matching_permission(principal, topic, Access::Read).is_some()
}

/// True iff some rule grants write access to `topic`.
pub fn can_write(principal: &Principal, topic: &str) -> bool {
    matching_permission(principal, topic, Access::Write).is_some()
}
