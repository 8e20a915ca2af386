//! Wildcard matching between topic templates and concrete topics.

/// Single-level wildcard segment.
const SINGLE_LEVEL: &str = "+";

/// Multi-level wildcard segment.
const MULTI_LEVEL: &str = "#";

/// Check whether a topic template matches a concrete topic.
///
/// Both strings are split on `/`; `+` matches exactly one segment at its
/// position, `#` matches everything from its position on. Without a `#` the
/// concrete topic must have exactly as many segments as the template.
///
/// Two deliberate departures from canonical MQTT filter semantics are kept
/// for compatibility with existing permission data: `#` is honored at any
/// position in the template, not only as the final segment, and matching
/// short-circuits there without inspecting later template segments. So
/// `a/#/ignored` matches `a/b`.
pub fn template_matches(template: &str, topic: &str) -> bool {
    if topic.trim().is_empty() {
        return false;
    }

    let template: Vec<&str> = template.split('/').collect();
    let concrete: Vec<&str> = topic.split('/').collect();

    if concrete.len() < template.len() {
        return false;
    }

    for (segment, actual) in template.iter().zip(&concrete) {
        if segment == actual || *segment == SINGLE_LEVEL {
            continue;
        }
        if *segment == MULTI_LEVEL {
            return true;
        }
        return false;
    }

    concrete.len() == template.len()
}
