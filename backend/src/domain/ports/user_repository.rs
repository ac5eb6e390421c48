//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique column (`username`, `email` or `id`) already holds the value.
        UniqueViolation { field: String } => "user {field} is already taken",
    }
}

/// Entity store for [`User`] records.
///
/// `create` runs in its own transaction: on any failure nothing is persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, assigning an id when the record does not carry one.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserPersistenceError>;

    /// Every user, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Number of stored users.
    async fn count(&self) -> Result<u64, UserPersistenceError>;

    /// Remove every user (and, through cascades, their dependents).
    ///
    /// Returns the number of users removed. Intended for fixture resets.
    async fn delete_all(&self) -> Result<u64, UserPersistenceError>;
}
