//! Per-principal topic namespace rewriting.

use std::borrow::Cow;

use portcullis_core::Principal;

/// Rewrite a topic into a principal's base-topic namespace.
///
/// No-op unless the principal has rewriting enabled and a non-blank base
/// topic. A topic that already starts with the base topic is left untouched,
/// which makes the rewrite idempotent; the guard is a plain string-prefix
/// check, matching how the stored permission data is written.
pub fn rewrite<'a>(principal: &Principal, topic: &'a str) -> Cow<'a, str> {
    let Some(base) = effective_base_topic(principal) else {
        return Cow::Borrowed(topic);
    };

    if topic.starts_with(base) {
        return Cow::Borrowed(topic);
    }

    Cow::Owned(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        topic.trim_start_matches('/')
    ))
}

fn effective_base_topic(principal: &Principal) -> Option<&str> {
    if !principal.rewrite_enabled {
        return None;
    }
    principal
        .base_topic
        .as_deref()
        .filter(|base| !base.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> Principal {
        Principal::new("bob", "$argon2id$stub").with_base_topic("tenants/42")
    }

    #[test]
    fn prefixes_topics_outside_the_namespace() {
        assert_eq!(rewrite(&tenant(), "data/x"), "tenants/42/data/x");
        assert_eq!(rewrite(&tenant(), "/data/x"), "tenants/42/data/x");
    }

    #[test]
    fn leaves_prefixed_topics_alone() {
        assert_eq!(rewrite(&tenant(), "tenants/42/data/x"), "tenants/42/data/x");
    }

    #[test]
    fn applying_twice_is_a_no_op() {
        let principal = tenant();
        let once = rewrite(&principal, "data/x").into_owned();
        let twice = rewrite(&principal, &once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn trailing_slash_on_base_topic_does_not_double_up() {
        let principal = Principal::new("bob", "$argon2id$stub").with_base_topic("tenants/42/");
        assert_eq!(rewrite(&principal, "data/x"), "tenants/42/data/x");
    }

    #[test]
    fn disabled_rewrite_or_blank_base_is_a_no_op() {
        let plain = Principal::new("alice", "$argon2id$stub");
        assert_eq!(rewrite(&plain, "data/x"), "data/x");

        let mut blank = Principal::new("bob", "$argon2id$stub").with_base_topic("   ");
        assert_eq!(rewrite(&blank, "data/x"), "data/x");

        blank.base_topic = Some("tenants/42".to_owned());
        blank.rewrite_enabled = false;
        assert_eq!(rewrite(&blank, "data/x"), "data/x");
    }
}
