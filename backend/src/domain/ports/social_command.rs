//! Driving port for write-side social actions.

use async_trait::async_trait;

use crate::domain::{Error, Like, Message, MessageId, MessageText, UserId};

/// Domain use-case port for posting, following and liking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialCommand: Send + Sync {
    /// Publish a message authored by `author`.
    async fn post_message(&self, author: UserId, text: MessageText) -> Result<Message, Error>;

    /// Make `follower` follow `followee`.
    async fn follow(&self, follower: UserId, followee: UserId) -> Result<(), Error>;

    /// Remove the follow of `follower` on `followee`; a missing edge is a no-op.
    async fn unfollow(&self, follower: UserId, followee: UserId) -> Result<(), Error>;

    /// Record that `user` likes `message`.
    async fn like(&self, user: UserId, message: MessageId) -> Result<Like, Error>;

    /// Withdraw the like of `user` on `message`; a missing like is a no-op.
    async fn unlike(&self, user: UserId, message: MessageId) -> Result<(), Error>;

    /// Like the message if not yet liked, otherwise unlike it.
    ///
    /// Returns whether the message is liked after the call.
    async fn toggle_like(&self, user: UserId, message: MessageId) -> Result<bool, Error>;
}
