//! Driving ports for account use-cases: signup and login.
//!
//! In hexagonal terms these are *driving* ports: inbound adapters call them
//! without knowing (or importing) the backing infrastructure, so HTTP handler
//! tests can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupRequest, User};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Hash the password and persist a new user.
    ///
    /// Duplicate usernames or emails fail with
    /// [`ErrorCode::Conflict`](crate::domain::ErrorCode::Conflict) and leave
    /// the store unchanged.
    async fn signup(&self, request: &SignupRequest) -> Result<User, Error>;
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching user.
    ///
    /// Unknown usernames and wrong passwords are `Ok(None)`; only store
    /// failures produce `Err`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error>;
}
