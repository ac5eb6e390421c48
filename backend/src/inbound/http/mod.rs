//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod dto;
pub mod error;
pub mod health;
pub mod messages;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

/// Register every API route (health probes excluded) along with the
/// extractor configuration that renders malformed input as JSON errors.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use warbler::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    error::extractor_config(cfg);
    cfg.service(users::signup)
        .service(users::login)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::user_messages)
        .service(users::user_following)
        .service(users::user_followers)
        .service(users::user_likes)
        .service(messages::get_message)
        .service(messages::message_likers);
}
