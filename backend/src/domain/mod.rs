//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the ports those layers implement, and the services
//! that drive them. Keep types immutable and document invariants in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, Message, FollowEdge, Like — the social graph entities.
//! - AccountService, SocialService — use-case implementations.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod follow;
pub mod like;
pub mod message;
pub mod ports;
pub mod social_service;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, SignupRequest, SignupValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::follow::{FollowEdge, FollowValidationError};
pub use self::like::{Like, NewLike};
pub use self::message::{
    MESSAGE_TEXT_MAX, Message, MessageId, MessageText, MessageValidationError, NewMessage,
};
pub use self::social_service::SocialService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DEFAULT_IMAGE_URL, Email, ImageUrl, NewUser, PasswordHash, USERNAME_MAX, User, UserId,
    UserList, UserValidationError, Username,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use warbler::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("no such user"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
