//! Argon2id, the preferred scheme.

use argon2::{Algorithm, Argon2, Params, Version};
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use portcullis_core::{PortcullisError, Result};

use crate::scheme::PasswordScheme;

/// Argon2id with the crate's current default parameters.
#[derive(Debug, Clone, Default)]
pub struct Argon2Scheme;

impl Argon2Scheme {
    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
    }
}

impl PasswordScheme for Argon2Scheme {
    fn ident(&self) -> &'static str {
        Algorithm::Argon2id.as_str()
    }

    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PortcullisError::credential(format!("argon2 hashing failed: {err}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &PasswordHash<'_>) -> bool {
        self.hasher()
            .verify_password(password.as_bytes(), stored)
            .is_ok()
    }

    fn needs_upgrade(&self, stored: &PasswordHash<'_>) -> bool {
        if stored.algorithm.as_str() != self.ident() {
            return true;
        }
        if stored.version != Some(u32::from(Version::V0x13)) {
            return true;
        }
        match Params::try_from(stored) {
            Ok(params) => {
                params.m_cost() < Params::DEFAULT_M_COST
                    || params.t_cost() < Params::DEFAULT_T_COST
                    || params.p_cost() < Params::DEFAULT_P_COST
            }
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_hash_verifies_and_is_current() {
        let scheme = Argon2Scheme;
        let hash = scheme.hash("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(scheme.verify("hunter2", &parsed));
        assert!(!scheme.verify("hunter3", &parsed));
        assert!(!scheme.needs_upgrade(&parsed));
    }

    #[test]
    fn below_default_parameters_need_upgrade() {
        let scheme = Argon2Scheme;
        let weak = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(Params::DEFAULT_M_COST / 2, 1, 1, None).unwrap(),
        );
        let salt = SaltString::generate(&mut OsRng);
        let hash = weak.hash_password(b"hunter2", &salt).unwrap().to_string();

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(scheme.verify("hunter2", &parsed));
        assert!(scheme.needs_upgrade(&parsed));
    }
}
