//! Port abstraction for message persistence.
use async_trait::async_trait;

use crate::domain::{Message, MessageId, NewMessage, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by message repository adapters.
    pub enum MessagePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "message repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "message repository query failed: {message}",
        /// The referenced author does not exist.
        MissingAuthor { user_id: i32 } => "author {user_id} does not exist",
    }
}

/// Entity store for [`Message`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message; the store assigns id and timestamp.
    async fn create(&self, message: &NewMessage) -> Result<Message, MessagePersistenceError>;

    /// Fetch a message by identifier.
    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError>;

    /// Messages written by `author`, in creation order.
    async fn list_by_author(&self, author: UserId)
    -> Result<Vec<Message>, MessagePersistenceError>;

    /// Every message, in creation order.
    async fn list_all(&self) -> Result<Vec<Message>, MessagePersistenceError>;

    /// Remove every message, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, MessagePersistenceError>;
}
