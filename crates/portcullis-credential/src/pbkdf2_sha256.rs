//! PBKDF2-SHA256, kept for hashes minted before the Argon2id rollout.

use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Algorithm, Params, Pbkdf2};
use portcullis_core::{PortcullisError, Result};

use crate::scheme::PasswordScheme;

const OUTPUT_LENGTH: usize = 32;

/// PBKDF2-HMAC-SHA256 with a configurable round count.
#[derive(Debug, Clone)]
pub struct Pbkdf2Scheme {
    rounds: u32,
}

impl Pbkdf2Scheme {
    /// Scheme with an explicit round count.
    pub fn with_rounds(rounds: u32) -> Self {
        Self { rounds }
    }
}

impl Default for Pbkdf2Scheme {
    fn default() -> Self {
        Self { rounds: 600_000 }
    }
}

impl PasswordScheme for Pbkdf2Scheme {
    fn ident(&self) -> &'static str {
        Algorithm::Pbkdf2Sha256.ident().as_str()
    }

    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Pbkdf2
            .hash_password_customized(
                password.as_bytes(),
                Some(Algorithm::Pbkdf2Sha256.ident()),
                None,
                Params {
                    rounds: self.rounds,
                    output_length: OUTPUT_LENGTH,
                },
                &salt,
            )
            .map_err(|err| PortcullisError::credential(format!("pbkdf2 hashing failed: {err}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &PasswordHash<'_>) -> bool {
        Pbkdf2.verify_password(password.as_bytes(), stored).is_ok()
    }

    fn needs_upgrade(&self, stored: &PasswordHash<'_>) -> bool {
        stored
            .params
            .get_decimal("i")
            .map_or(true, |rounds| rounds < self.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips_and_rejects_wrong_password() {
        let scheme = Pbkdf2Scheme::with_rounds(1_000);
        let hash = scheme.hash("hunter2").unwrap();
        assert!(hash.starts_with("$pbkdf2-sha256$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(scheme.verify("hunter2", &parsed));
        assert!(!scheme.verify("hunter3", &parsed));
    }

    #[test]
    fn low_round_hash_needs_upgrade() {
        let low = Pbkdf2Scheme::with_rounds(1_000).hash("hunter2").unwrap();
        let parsed = PasswordHash::new(&low).unwrap();
        assert!(Pbkdf2Scheme::default().needs_upgrade(&parsed));
    }
}
