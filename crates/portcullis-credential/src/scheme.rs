//! The password-scheme capability.

use password_hash::PasswordHash;
use portcullis_core::Result;

/// A password hashing scheme the verifier understands.
///
/// Schemes form a closed set owned by a [`CredentialSuite`](crate::CredentialSuite);
/// adding a stronger default algorithm means adding an implementation here
/// and promoting it to preferred, without touching any caller.
pub trait PasswordScheme: Send + Sync {
    /// PHC algorithm identifier this scheme produces and recognizes.
    fn ident(&self) -> &'static str;

    /// Hash a plaintext password into a self-describing PHC string.
    fn hash(&self, password: &str) -> Result<String>;

    /// Verify a plaintext password against a parsed stored hash.
    ///
    /// Digest comparison is constant-time; any parameter or encoding problem
    /// counts as a mismatch.
    fn verify(&self, password: &str, stored: &PasswordHash<'_>) -> bool;

    /// Whether a stored hash of this scheme was minted with parameters below
    /// the scheme's current settings.
    fn needs_upgrade(&self, stored: &PasswordHash<'_>) -> bool;
}
