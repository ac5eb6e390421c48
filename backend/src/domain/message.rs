//! Messages ("warbles") authored by users.

use std::fmt;

use chrono::{DateTime, Utc};

use super::UserId;

/// Validation errors for message values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValidationError {
    NonPositiveId,
    EmptyText,
    TextTooLong { max: usize },
}

impl fmt::Display for MessageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "message id must be a positive integer"),
            Self::EmptyText => write!(f, "message text must not be empty"),
            Self::TextTooLong { max } => {
                write!(f, "message text must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for MessageValidationError {}

/// Numeric message identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(i32);

impl MessageId {
    /// Validate and construct a [`MessageId`].
    pub fn new(id: i32) -> Result<Self, MessageValidationError> {
        if id <= 0 {
            return Err(MessageValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    pub(crate) fn from_store(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum message length in characters.
pub const MESSAGE_TEXT_MAX: usize = 140;

/// Message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Validate and construct a [`MessageText`].
    pub fn new(text: impl Into<String>) -> Result<Self, MessageValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(MessageValidationError::EmptyText);
        }
        if text.chars().count() > MESSAGE_TEXT_MAX {
            return Err(MessageValidationError::TextTooLong {
                max: MESSAGE_TEXT_MAX,
            });
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: MessageText,
    pub timestamp: DateTime<Utc>,
    pub user_id: UserId,
}

/// Message awaiting insertion; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub user_id: UserId,
    pub text: MessageText,
}
