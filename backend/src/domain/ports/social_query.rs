//! Driving port for read-side relationship queries.

use async_trait::async_trait;

use crate::domain::{Error, Like, Message, MessageId, User, UserId};

/// Domain use-case port for reading users, messages, follows and likes.
///
/// Lookups of a single entity return [`ErrorCode::NotFound`] when it is
/// missing; collection queries on an unknown user or message do too.
///
/// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialQuery: Send + Sync {
    /// A single user.
    async fn user(&self, id: UserId) -> Result<User, Error>;

    /// Every user, ordered by id.
    async fn users(&self) -> Result<Vec<User>, Error>;

    /// Messages authored by `user`.
    async fn messages(&self, user: UserId) -> Result<Vec<Message>, Error>;

    /// The `following` view of `user`: followers on edges whose followee is
    /// `user`. After `follow(b, a)`, `following(a)` lists `b`.
    async fn following(&self, user: UserId) -> Result<Vec<User>, Error>;

    /// The `followers` view of `user`: followees on edges whose follower is
    /// `user`. After `follow(b, a)`, `followers(b)` lists `a`.
    async fn followers(&self, user: UserId) -> Result<Vec<User>, Error>;

    /// Whether `other` appears in `following(user)`.
    async fn is_following(&self, user: UserId, other: UserId) -> Result<bool, Error>;

    /// Whether `other` appears in `followers(user)`.
    async fn is_followed_by(&self, user: UserId, other: UserId) -> Result<bool, Error>;

    /// A single message.
    async fn message(&self, id: MessageId) -> Result<Message, Error>;

    /// Users who liked `message`.
    async fn likers(&self, message: MessageId) -> Result<Vec<User>, Error>;

    /// Like records attached to `message`.
    async fn likes(&self, message: MessageId) -> Result<Vec<Like>, Error>;

    /// Messages liked by `user`.
    async fn liked_messages(&self, user: UserId) -> Result<Vec<Message>, Error>;
}
