//! Property checks for the matcher and the rewriter.

use portcullis_core::{Permission, Principal};
use portcullis_policy::{can_read, rewrite, template_matches};
use proptest::collection::vec;
use proptest::prelude::*;

fn segments(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    vec("[a-z0-9]{1,6}", range)
}

proptest! {
    #[test]
    fn rewrite_is_idempotent(
        base in segments(1..3),
        topic in segments(1..5),
    ) {
        let principal = Principal::new("bob", "$argon2id$stub").with_base_topic(base.join("/"));
        let topic = topic.join("/");

        let once = rewrite(&principal, &topic).into_owned();
        let twice = rewrite(&principal, &once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn wildcard_free_templates_match_exactly_themselves(
        template in segments(1..4),
        topic in segments(1..4),
    ) {
        let template = template.join("/");
        let topic = topic.join("/");

        prop_assert_eq!(template_matches(&template, &topic), template == topic);
    }

    #[test]
    fn read_decision_is_stable_under_prefixing(
        base in segments(1..3),
        template in segments(1..4),
        topic in segments(1..4),
    ) {
        let principal = Principal::new("bob", "$argon2id$stub")
            .with_base_topic(base.join("/"))
            .with_permissions(vec![Permission::read(template.join("/"))]);
        let topic = topic.join("/");

        let plain = can_read(&principal, &topic);
        let prefixed = can_read(&principal, &rewrite(&principal, &topic));
        prop_assert_eq!(plain, prefixed);
    }
}
