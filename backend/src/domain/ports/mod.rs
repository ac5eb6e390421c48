//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by the
//! outbound adapters. Driving ports ([`SignupService`], [`LoginService`],
//! [`SocialQuery`], [`SocialCommand`]) are what the inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod follow_repository;
mod like_repository;
mod login_service;
mod message_repository;
mod password_hasher;
mod social_command;
mod social_query;
mod user_repository;

#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FollowPersistenceError, FollowRepository};
#[cfg(test)]
pub use like_repository::MockLikeRepository;
pub use like_repository::{LikePersistenceError, LikeRepository};
#[cfg(test)]
pub use login_service::{MockLoginService, MockSignupService};
pub use login_service::{LoginService, SignupService};
#[cfg(test)]
pub use message_repository::MockMessageRepository;
pub use message_repository::{MessagePersistenceError, MessageRepository};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHashingError};
#[cfg(test)]
pub use social_command::MockSocialCommand;
pub use social_command::SocialCommand;
#[cfg(test)]
pub use social_query::MockSocialQuery;
pub use social_query::SocialQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
