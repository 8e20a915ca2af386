//! Incoming hook payloads.

use portcullis_core::{PortcullisError, Result};
use serde::Deserialize;

/// One requested subscription in a subscribe hook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicClaim {
    /// Requested topic filter
    pub topic: String,
    /// Requested quality of service
    pub qos: u8,
}

/// A hook invocation from the broker.
///
/// Payloads may carry additional broker-specific fields (mountpoint, peer
/// address, message body); everything not needed for the decision is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "hook")]
pub enum HookRequest {
    /// Client connect
    #[serde(rename = "auth_on_register")]
    Register {
        /// Supplied username, normalized before lookup
        username: String,
        /// Supplied password; absent counts as a failed verification
        #[serde(default)]
        password: Option<String>,
        /// Client identifier to check against the principal's pattern
        client_id: String,
    },

    /// Subscription request, possibly for several topics at once
    #[serde(rename = "auth_on_subscribe")]
    Subscribe {
        /// Supplied username, normalized before lookup
        username: String,
        /// Requested `(topic, qos)` pairs
        topics: Vec<TopicClaim>,
    },

    /// Publish to a single topic
    #[serde(rename = "auth_on_publish")]
    Publish {
        /// Supplied username, normalized before lookup
        username: String,
        /// Target topic
        topic: String,
    },
}

impl HookRequest {
    /// Parse a hook payload.
    ///
    /// An unrecognized hook kind fails here, before any evaluation runs;
    /// this is the only protocol-level rejection the engine produces.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|err| PortcullisError::invalid(format!("unsupported hook payload: {err}")))
    }

    /// The username the hook is about.
    pub fn username(&self) -> &str {
        match self {
            HookRequest::Register { username, .. }
            | HookRequest::Subscribe { username, .. }
            | HookRequest::Publish { username, .. } => username,
        }
    }
}
