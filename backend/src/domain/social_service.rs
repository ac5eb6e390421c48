//! Social graph domain service.
//!
//! Implements [`SocialQuery`] and [`SocialCommand`] over the message, follow
//! and like repositories. Every operation that names a user or message checks
//! that it exists first, so callers see `NotFound` rather than an empty list.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::account_service::map_user_persistence_error;
use crate::domain::ports::{
    FollowPersistenceError, FollowRepository, LikePersistenceError, LikeRepository,
    MessagePersistenceError, MessageRepository, SocialCommand, SocialQuery, UserRepository,
};
use crate::domain::{
    Error, FollowEdge, Like, Message, MessageId, MessageText, NewLike, NewMessage, User, UserId,
};

/// Social service implementing the relationship driving ports.
pub struct SocialService<U, M, F, L> {
    users: Arc<U>,
    messages: Arc<M>,
    follows: Arc<F>,
    likes: Arc<L>,
}

impl<U, M, F, L> Clone for SocialService<U, M, F, L> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            messages: Arc::clone(&self.messages),
            follows: Arc::clone(&self.follows),
            likes: Arc::clone(&self.likes),
        }
    }
}

impl<U, M, F, L> SocialService<U, M, F, L> {
    /// Create a new service over the given repositories.
    pub fn new(users: Arc<U>, messages: Arc<M>, follows: Arc<F>, likes: Arc<L>) -> Self {
        Self {
            users,
            messages,
            follows,
            likes,
        }
    }
}

fn map_message_error(error: MessagePersistenceError) -> Error {
    match error {
        MessagePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("message repository unavailable: {message}"))
        }
        MessagePersistenceError::Query { message } => {
            Error::internal(format!("message repository error: {message}"))
        }
        MessagePersistenceError::MissingAuthor { user_id } => {
            Error::not_found(format!("user {user_id} not found"))
        }
    }
}

fn map_follow_error(error: FollowPersistenceError) -> Error {
    match error {
        FollowPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("follow repository unavailable: {message}"))
        }
        FollowPersistenceError::Query { message } => {
            Error::internal(format!("follow repository error: {message}"))
        }
        FollowPersistenceError::DuplicateEdge => Error::conflict("already following"),
        FollowPersistenceError::MissingUser => Error::not_found("user not found"),
    }
}

fn map_like_error(error: LikePersistenceError) -> Error {
    match error {
        LikePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("like repository unavailable: {message}"))
        }
        LikePersistenceError::Query { message } => {
            Error::internal(format!("like repository error: {message}"))
        }
        LikePersistenceError::DuplicateLike => Error::conflict("message already liked"),
        LikePersistenceError::MissingReference => Error::not_found("user or message not found"),
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({ "userId": id.get() }))
}

fn message_not_found(id: MessageId) -> Error {
    Error::not_found(format!("message {id} not found"))
        .with_details(json!({ "messageId": id.get() }))
}

impl<U, M, F, L> SocialService<U, M, F, L>
where
    U: UserRepository,
    M: MessageRepository,
    F: FollowRepository,
    L: LikeRepository,
{
    async fn require_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn require_message(&self, id: MessageId) -> Result<Message, Error> {
        self.messages
            .find_by_id(id)
            .await
            .map_err(map_message_error)?
            .ok_or_else(|| message_not_found(id))
    }

    async fn follow_edge(&self, follower: UserId, followee: UserId) -> Result<FollowEdge, Error> {
        let edge = FollowEdge::new(follower, followee).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "followee" }))
        })?;
        self.require_user(follower).await?;
        self.require_user(followee).await?;
        Ok(edge)
    }

    async fn edge_exists(&self, follower: UserId, followee: UserId) -> Result<bool, Error> {
        self.require_user(follower).await?;
        self.require_user(followee).await?;
        let Ok(edge) = FollowEdge::new(follower, followee) else {
            return Ok(false);
        };
        self.follows.exists(edge).await.map_err(map_follow_error)
    }
}

#[async_trait]
impl<U, M, F, L> SocialQuery for SocialService<U, M, F, L>
where
    U: UserRepository,
    M: MessageRepository,
    F: FollowRepository,
    L: LikeRepository,
{
    async fn user(&self, id: UserId) -> Result<User, Error> {
        self.require_user(id).await
    }

    async fn users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_all()
            .await
            .map_err(map_user_persistence_error)
    }

    async fn messages(&self, user: UserId) -> Result<Vec<Message>, Error> {
        self.require_user(user).await?;
        self.messages
            .list_by_author(user)
            .await
            .map_err(map_message_error)
    }

    async fn following(&self, user: UserId) -> Result<Vec<User>, Error> {
        self.require_user(user).await?;
        self.follows.following(user).await.map_err(map_follow_error)
    }

    async fn followers(&self, user: UserId) -> Result<Vec<User>, Error> {
        self.require_user(user).await?;
        self.follows.followers(user).await.map_err(map_follow_error)
    }

    async fn is_following(&self, user: UserId, other: UserId) -> Result<bool, Error> {
        self.edge_exists(other, user).await
    }

    async fn is_followed_by(&self, user: UserId, other: UserId) -> Result<bool, Error> {
        self.edge_exists(user, other).await
    }

    async fn message(&self, id: MessageId) -> Result<Message, Error> {
        self.require_message(id).await
    }

    async fn likers(&self, message: MessageId) -> Result<Vec<User>, Error> {
        self.require_message(message).await?;
        self.likes.likers(message).await.map_err(map_like_error)
    }

    async fn likes(&self, message: MessageId) -> Result<Vec<Like>, Error> {
        self.require_message(message).await?;
        self.likes
            .likes_for_message(message)
            .await
            .map_err(map_like_error)
    }

    async fn liked_messages(&self, user: UserId) -> Result<Vec<Message>, Error> {
        self.require_user(user).await?;
        self.likes
            .liked_messages(user)
            .await
            .map_err(map_like_error)
    }
}

#[async_trait]
impl<U, M, F, L> SocialCommand for SocialService<U, M, F, L>
where
    U: UserRepository,
    M: MessageRepository,
    F: FollowRepository,
    L: LikeRepository,
{
    async fn post_message(&self, author: UserId, text: MessageText) -> Result<Message, Error> {
        self.require_user(author).await?;
        let message = self
            .messages
            .create(&NewMessage {
                user_id: author,
                text,
            })
            .await
            .map_err(map_message_error)?;
        info!(user_id = %author, message_id = %message.id, "message posted");
        Ok(message)
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> Result<(), Error> {
        let edge = self.follow_edge(follower, followee).await?;
        if self.follows.exists(edge).await.map_err(map_follow_error)? {
            return Ok(());
        }
        match self.follows.create(edge).await {
            Ok(()) | Err(FollowPersistenceError::DuplicateEdge) => Ok(()),
            Err(err) => Err(map_follow_error(err)),
        }
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> Result<(), Error> {
        let edge = self.follow_edge(follower, followee).await?;
        self.follows.delete(edge).await.map_err(map_follow_error)?;
        Ok(())
    }

    async fn like(&self, user: UserId, message: MessageId) -> Result<Like, Error> {
        self.require_user(user).await?;
        let target = self.require_message(message).await?;
        if target.user_id == user {
            return Err(Error::invalid_request("users cannot like their own messages")
                .with_details(json!({ "messageId": message.get() })));
        }

        if let Some(existing) = self
            .likes
            .find(user, message)
            .await
            .map_err(map_like_error)?
        {
            return Ok(existing);
        }

        let like = NewLike {
            user_id: user,
            message_id: message,
        };
        match self.likes.create(like).await {
            Ok(created) => Ok(created),
            Err(LikePersistenceError::DuplicateLike) => self
                .likes
                .find(user, message)
                .await
                .map_err(map_like_error)?
                .ok_or_else(|| map_like_error(LikePersistenceError::DuplicateLike)),
            Err(err) => Err(map_like_error(err)),
        }
    }

    async fn unlike(&self, user: UserId, message: MessageId) -> Result<(), Error> {
        self.require_user(user).await?;
        self.require_message(message).await?;
        self.likes
            .delete(user, message)
            .await
            .map_err(map_like_error)?;
        Ok(())
    }

    async fn toggle_like(&self, user: UserId, message: MessageId) -> Result<bool, Error> {
        self.require_user(user).await?;
        self.require_message(message).await?;
        let removed = self
            .likes
            .delete(user, message)
            .await
            .map_err(map_like_error)?;
        if removed {
            return Ok(false);
        }
        self.like(user, message).await?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "social_service_tests.rs"]
mod tests;
