//! Warbler data layer: users, messages, follows and likes.
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`]: entities, port traits and the account/social services.
//! - [`inbound`]: the actix-web HTTP adapter.
//! - [`outbound`]: Diesel/PostgreSQL repositories, the in-memory store and
//!   Argon2 password hashing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
