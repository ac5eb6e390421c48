//! Driven port for one-way salted password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashingError {
        /// The hasher could not produce a hash.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Hashes plaintext passwords and verifies them against stored hashes.
///
/// Verification never errors: an unparseable stored hash simply fails to
/// match.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted hash of `password`.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashingError>;

    /// Whether `password` matches `hash`.
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}
