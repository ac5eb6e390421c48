//! Argon2id implementation of the `PasswordHasher` port.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) carrying their own salt and
//! parameters, so verification needs nothing beyond the stored value.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::Argon2;
use tracing::warn;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHashingError};

/// Argon2id hasher with the crate's default parameters and a fresh random
/// salt per hash.
///
/// # Examples
/// ```
/// use warbler::domain::ports::PasswordHasher;
/// use warbler::outbound::credentials::Argon2PasswordHasher;
///
/// let hasher = Argon2PasswordHasher;
/// let hash = hasher.hash("test1").unwrap();
/// assert_ne!(hash.as_ref(), "test1");
/// assert!(hasher.verify("test1", &hash));
/// assert!(!hasher.verify("wrong", &hash));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordHashingError::hashing(err.to_string()))?
            .to_string();
        PasswordHash::new(encoded).map_err(|err| PasswordHashingError::hashing(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let parsed = match PhcHash::new(hash.as_ref()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(error = %err, "stored password hash is not a PHC string");
                return false;
            }
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
