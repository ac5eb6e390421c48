//! Request and response payloads for the HTTP adapter.
//!
//! Domain entities stay free of serde and utoipa derives; handlers convert
//! into these DTOs at the edge. No response ever carries a password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LoginCredentials, LoginValidationError, Message, User};

/// Form body for `POST /signup`.
///
/// Absent fields decode as empty strings so signup validation reports them
/// by name.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignupForm {
    #[serde(default)]
    #[schema(example = "Kristina")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "test1@gmail.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "test1")]
    pub password: String,
    /// Optional avatar location; blank or missing uses the default image.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    #[schema(example = "Kristina")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "test1")]
    pub password: String,
}

impl TryFrom<LoginForm> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginForm) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kristina")]
    pub username: String,
    #[schema(example = "test1@gmail.com")]
    pub email: String,
    #[schema(example = "/static/images/default-pic.png")]
    pub image_url: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            username: user.username().as_ref().to_owned(),
            email: user.email().as_ref().to_owned(),
            image_url: user.image_url().as_ref().to_owned(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Public view of a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hello, Warbler!")]
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = 1)]
    pub user_id: i32,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.get(),
            text: message.text.as_ref().to_owned(),
            timestamp: message.timestamp,
            user_id: message.user_id.get(),
        }
    }
}

pub(crate) fn users_response(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

pub(crate) fn messages_response(messages: Vec<Message>) -> Vec<MessageResponse> {
    messages.into_iter().map(MessageResponse::from).collect()
}
