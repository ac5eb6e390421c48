//! Likes linking a user to a message.

use super::{MessageId, UserId};

/// Persisted like record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Like {
    pub id: i32,
    pub user_id: UserId,
    pub message_id: MessageId,
}

/// Like awaiting insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLike {
    pub user_id: UserId,
    pub message_id: MessageId,
}
