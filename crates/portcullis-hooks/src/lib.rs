//! Portcullis Hooks
//!
//! The broker-facing surface of the decision engine. The broker consults
//! this crate synchronously before letting a client connect, subscribe, or
//! publish:
//!
//! 1. the transport layer parses the payload with [`HookRequest::from_json`]
//!    (unknown hook kinds are rejected right there),
//! 2. [`HookDispatcher::dispatch`] resolves the principal through a
//!    [`PrincipalDirectory`], verifies credentials or evaluates topic
//!    permissions, and
//! 3. the resulting [`HookResponse`] serializes back into the broker's
//!    webhook JSON shapes.
//!
//! Every failure along the way is a structured decision payload; the hook
//! call itself never faults.

#![forbid(unsafe_code)]

pub mod config;
pub mod directory;
pub mod dispatcher;
pub mod request;
pub mod response;

pub use config::{ClientIdPolicy, DispatcherConfig};
pub use directory::{MemoryDirectory, PrincipalDirectory};
pub use dispatcher::HookDispatcher;
pub use request::{HookRequest, TopicClaim};
pub use response::{HookResponse, TopicGrant, DENIED_SUBSCRIPTION_QOS};
