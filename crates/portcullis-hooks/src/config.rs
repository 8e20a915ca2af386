//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// How a stored client-id pattern is applied to a supplied client id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientIdPolicy {
    /// The pattern must occur exactly once within the client id. Compatible
    /// with deployments whose patterns rely on substring counting.
    #[default]
    OccurrenceCount,

    /// The pattern must match the whole client id.
    FullMatch,
}

/// Dispatcher tunables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Client-id pattern application mode
    pub client_id_policy: ClientIdPolicy,
}
