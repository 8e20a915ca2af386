//! Portcullis Credential
//!
//! Password storage and verification for broker principals. Hashes are
//! self-describing PHC strings, so a stored hash carries its own algorithm
//! tag, parameters, and salt. Verification is driven by a
//! [`CredentialSuite`]: a closed set of [`PasswordScheme`] implementations
//! with one preferred scheme for newly minted hashes.
//!
//! A hash produced by anything other than the preferred scheme, or by the
//! preferred scheme with below-current parameters, still verifies, but the
//! suite reports that it needs a rehash so the caller can transparently
//! upgrade it while the plaintext is still in memory.
//!
//! Malformed or unrecognized stored hashes fail closed: they verify as
//! invalid and never escape as an error into the surrounding hook.

#![forbid(unsafe_code)]

mod argon2id;
mod pbkdf2_sha256;
mod scheme;
mod suite;

pub use argon2id::Argon2Scheme;
pub use pbkdf2_sha256::Pbkdf2Scheme;
pub use scheme::PasswordScheme;
pub use suite::{CredentialSuite, Verification};
