//! The closed scheme set and its verification entry point.

use password_hash::PasswordHash;
use portcullis_core::Result;

use crate::argon2id::Argon2Scheme;
use crate::pbkdf2_sha256::Pbkdf2Scheme;
use crate::scheme::PasswordScheme;

/// Outcome of checking a supplied password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// The supplied password matched the stored hash
    pub is_valid: bool,

    /// The stored hash should be recomputed under the preferred scheme.
    /// Only ever set alongside `is_valid`; without the matching plaintext
    /// there is nothing to rehash.
    pub needs_rehash: bool,
}

impl Verification {
    /// Verification failure, including the fail-closed malformed-hash case.
    pub const REJECTED: Self = Self {
        is_valid: false,
        needs_rehash: false,
    };
}

/// A closed set of password schemes with one preferred scheme for new hashes.
pub struct CredentialSuite {
    preferred: Box<dyn PasswordScheme>,
    legacy: Vec<Box<dyn PasswordScheme>>,
}

impl Default for CredentialSuite {
    fn default() -> Self {
        Self {
            preferred: Box::new(Argon2Scheme),
            legacy: vec![Box::new(Pbkdf2Scheme::default())],
        }
    }
}

impl CredentialSuite {
    /// Assemble a suite from an explicit preferred scheme and legacy set.
    pub fn new(preferred: Box<dyn PasswordScheme>, legacy: Vec<Box<dyn PasswordScheme>>) -> Self {
        Self { preferred, legacy }
    }

    fn scheme_for(&self, ident: &str) -> Option<(&dyn PasswordScheme, bool)> {
        if self.preferred.ident() == ident {
            return Some((self.preferred.as_ref(), true));
        }
        self.legacy
            .iter()
            .find(|scheme| scheme.ident() == ident)
            .map(|scheme| (scheme.as_ref(), false))
    }

    /// Check a supplied password against a stored hash string.
    ///
    /// Fails closed: a malformed hash or an unrecognized algorithm tag
    /// verifies as invalid rather than surfacing an error to the hook.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Verification {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(%err, "stored password hash did not parse");
                return Verification::REJECTED;
            }
        };

        let Some((scheme, is_preferred)) = self.scheme_for(parsed.algorithm.as_str()) else {
            tracing::debug!(
                algorithm = parsed.algorithm.as_str(),
                "no scheme for stored hash algorithm"
            );
            return Verification::REJECTED;
        };

        let is_valid = scheme.verify(password, &parsed);
        let needs_rehash = is_valid && (!is_preferred || scheme.needs_upgrade(&parsed));
        Verification {
            is_valid,
            needs_rehash,
        }
    }

    /// Hash a password with the preferred scheme.
    pub fn hash(&self, password: &str) -> Result<String> {
        self.preferred.hash(password)
    }
}
