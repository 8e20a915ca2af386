//! Portcullis Core
//!
//! Shared foundation for the Portcullis authorization decision engine: the
//! principal/permission data model and the unified error type used across
//! the workspace.
//!
//! Principals and their permissions are created and edited by an external
//! administrative layer; everything in this workspace only reads them, with
//! the single exception of the password rehash write-back performed through
//! the directory seam in `portcullis-hooks`.

#![forbid(unsafe_code)]

pub mod errors;
pub mod principal;

pub use errors::{PortcullisError, Result};
pub use principal::{normalize_username, Permission, Principal, DEFAULT_CLIENT_ID_PATTERN};
