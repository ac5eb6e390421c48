//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the DTO and error schemas. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::dto::{LoginForm, MessageResponse, SignupForm, UserResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warbler API",
        description = "Accounts, messages, follows and likes for the Warbler social app.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::user_messages,
        crate::inbound::http::users::user_following,
        crate::inbound::http::users::user_followers,
        crate::inbound::http::users::user_likes,
        crate::inbound::http::messages::get_message,
        crate::inbound::http::messages::message_likers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SignupForm,
        LoginForm,
        UserResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Accounts and the follow graph"),
        (name = "messages", description = "Messages and their likes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
