//! Decision payloads returned to the broker.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// QoS sentinel marking one subscription in a batch as not granted.
pub const DENIED_SUBSCRIPTION_QOS: u8 = 128;

/// Decision for one requested subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicGrant {
    /// The (possibly rewritten) topic
    pub topic: String,
    /// Granted QoS, or [`DENIED_SUBSCRIPTION_QOS`]
    pub qos: u8,
}

impl TopicGrant {
    /// Subscription allowed at the requested QoS.
    pub fn granted(topic: impl Into<String>, qos: u8) -> Self {
        Self {
            topic: topic.into(),
            qos,
        }
    }

    /// Subscription suppressed; the rest of the batch is unaffected.
    pub fn denied(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            qos: DENIED_SUBSCRIPTION_QOS,
        }
    }

    /// Whether this entry carries the denial sentinel.
    pub fn is_denied(&self) -> bool {
        self.qos == DENIED_SUBSCRIPTION_QOS
    }
}

/// Decision payload for one hook invocation.
///
/// Serializes into the broker's webhook shapes:
/// `{"result":"ok"}`, `{"result":"ok","topics":[...]}`,
/// `{"result":"ok","modifiers":{"topic":...}}`, and
/// `{"result":{"error":...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResponse {
    /// Plain acceptance
    Ok,
    /// Per-topic subscribe decisions; the batch as a whole always succeeds
    Subscriptions(Vec<TopicGrant>),
    /// Publish accepted, carrying the (possibly rewritten) topic
    Publish {
        /// Topic the broker should route the message to
        topic: String,
    },
    /// Structured denial with a human-readable reason
    Denied {
        /// Why the hook was denied
        reason: String,
    },
}

impl HookResponse {
    /// Denial with the given reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied {
            reason: reason.into(),
        }
    }

    /// Whether this decision denies the whole hook.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct Modifiers<'a> {
    topic: &'a str,
}

impl Serialize for HookResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HookResponse::Ok => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("result", "ok")?;
                map.end()
            }
            HookResponse::Subscriptions(grants) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("result", "ok")?;
                map.serialize_entry("topics", grants)?;
                map.end()
            }
            HookResponse::Publish { topic } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("result", "ok")?;
                map.serialize_entry("modifiers", &Modifiers { topic })?;
                map.end()
            }
            HookResponse::Denied { reason } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("result", &ErrorBody { error: reason })?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_serializes_to_result_ok() {
        assert_eq!(
            serde_json::to_value(HookResponse::Ok).unwrap(),
            json!({"result": "ok"})
        );
    }

    #[test]
    fn subscriptions_carry_per_topic_grants() {
        let response = HookResponse::Subscriptions(vec![
            TopicGrant::granted("a/b", 1),
            TopicGrant::denied("c/d"),
        ]);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "result": "ok",
                "topics": [
                    {"topic": "a/b", "qos": 1},
                    {"topic": "c/d", "qos": 128},
                ]
            })
        );
    }

    #[test]
    fn publish_carries_topic_modifier() {
        let response = HookResponse::Publish {
            topic: "tenants/42/data/x".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"result": "ok", "modifiers": {"topic": "tenants/42/data/x"}})
        );
    }

    #[test]
    fn denial_wraps_the_reason() {
        let response = HookResponse::denied("the user 'ghost' is unknown");
        assert!(response.is_denied());
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"result": {"error": "the user 'ghost' is unknown"}})
        );
    }
}
