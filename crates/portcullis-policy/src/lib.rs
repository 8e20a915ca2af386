//! Portcullis Policy
//!
//! Topic-level access evaluation: wildcard matching between stored topic
//! templates and concrete topics, per-principal namespace rewriting, and the
//! permission scan that combines the two into a read/write decision.
//!
//! Everything here is a pure function over the `portcullis-core` data model;
//! the hook dispatcher owns lookup, ordering, and response shaping.

#![forbid(unsafe_code)]

pub mod evaluate;
pub mod rewrite;
pub mod topic;

pub use evaluate::{can_read, can_write, matching_permission, Access};
pub use rewrite::rewrite;
pub use topic::template_matches;
