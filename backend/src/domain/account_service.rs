//! Account domain service: signup and password authentication.
//!
//! Implements the [`SignupService`] and [`LoginService`] driving ports over a
//! [`UserRepository`] and a [`PasswordHasher`]. Hashing and verification run
//! on tokio's blocking pool so Argon2 never stalls a request worker.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::task::{self, JoinError};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    LoginService, PasswordHasher, PasswordHashingError, SignupService, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, NewUser, PasswordHash, SignupRequest, User};

/// Account service implementing signup and login.
#[derive(Clone)]
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::UniqueViolation { field } => {
            Error::conflict(format!("{field} is already taken")).with_details(json!({
                "field": field,
                "code": "duplicate_user",
            }))
        }
    }
}

fn map_hashing_error(error: PasswordHashingError) -> Error {
    match error {
        PasswordHashingError::Hashing { message } => {
            Error::internal(format!("password hashing failed: {message}"))
        }
    }
}

fn map_join_error(error: JoinError) -> Error {
    Error::internal(format!("password hashing task failed: {error}"))
}

impl<U, H> AccountService<U, H>
where
    H: PasswordHasher + 'static,
{
    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(map_join_error)?
            .map_err(map_hashing_error)
    }

    async fn verify_password(&self, password: &str, hash: &PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.clone();
        task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(map_join_error)
    }
}

#[async_trait]
impl<U, H> SignupService for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn signup(&self, request: &SignupRequest) -> Result<User, Error> {
        let password_hash = self.hash_password(request.password()).await?;
        let new_user = NewUser::new(
            request.username().clone(),
            request.email().clone(),
            password_hash,
        )
        .with_image_url(request.image_url().clone());

        let user = self
            .users
            .create(&new_user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), username = %user.username(), "user signed up");
        Ok(user)
    }
}

#[async_trait]
impl<U, H> LoginService for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?
        else {
            debug!("authentication failed: unknown username");
            return Ok(None);
        };

        if self
            .verify_password(credentials.password(), user.password_hash())
            .await?
        {
            Ok(Some(user))
        } else {
            debug!(user_id = %user.id(), "authentication failed: password mismatch");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
