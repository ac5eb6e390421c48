//! Port abstraction for the likes join table.
use async_trait::async_trait;

use crate::domain::{Like, Message, MessageId, NewLike, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by like repository adapters.
    pub enum LikePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "like repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "like repository query failed: {message}",
        /// The user already likes the message.
        DuplicateLike => "message is already liked by this user",
        /// The referenced user or message does not exist.
        MissingReference => "like references an unknown user or message",
    }
}

/// Store for [`Like`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like.
    async fn create(&self, like: NewLike) -> Result<Like, LikePersistenceError>;

    /// Remove the like of `user` on `message`, returning whether it existed.
    async fn delete(&self, user: UserId, message: MessageId) -> Result<bool, LikePersistenceError>;

    /// The like of `user` on `message`, if any.
    async fn find(
        &self,
        user: UserId,
        message: MessageId,
    ) -> Result<Option<Like>, LikePersistenceError>;

    /// Like records attached to `message`, in insertion order.
    async fn likes_for_message(&self, message: MessageId)
    -> Result<Vec<Like>, LikePersistenceError>;

    /// Users who liked `message`, in like order.
    async fn likers(&self, message: MessageId) -> Result<Vec<User>, LikePersistenceError>;

    /// Messages liked by `user`, in like order.
    async fn liked_messages(&self, user: UserId) -> Result<Vec<Message>, LikePersistenceError>;

    /// Remove every like, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, LikePersistenceError>;
}
