//! Port abstraction for the follow edge table.
//!
//! `following` and `followers` are explicit queries over the edge table rather
//! than relationships hanging off the user record.
//!
//! The views keep Warbler's column convention: an edge
//! `(follower_id = B, followee_id = A)` lists B in A's `following` and A in
//! B's `followers`.
use async_trait::async_trait;

use crate::domain::{FollowEdge, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by follow repository adapters.
    pub enum FollowPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "follow repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "follow repository query failed: {message}",
        /// The edge already exists.
        DuplicateEdge => "follow edge already exists",
        /// One of the referenced users does not exist.
        MissingUser => "follow edge references an unknown user",
    }
}

/// Store for directed follower → followee edges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert an edge.
    async fn create(&self, edge: FollowEdge) -> Result<(), FollowPersistenceError>;

    /// Remove an edge, returning whether it existed.
    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Whether the edge exists.
    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Followers recorded on edges whose followee is `user`, in
    /// edge-insertion order.
    async fn following(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError>;

    /// Followees recorded on edges whose follower is `user`, in
    /// edge-insertion order.
    async fn followers(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError>;

    /// Remove every edge, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, FollowPersistenceError>;
}
