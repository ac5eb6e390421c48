//! Message read handlers.

use actix_web::{get, web};

use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{MessageResponse, UserResponse, users_response};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_message_id;

/// Fetch one message.
#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(("id" = i32, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message", body = MessageResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown message", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "getMessage"
)]
#[get("/messages/{id}")]
pub async fn get_message(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_message_id(path.into_inner())?;
    let message = state.social.message(id).await?;
    Ok(web::Json(MessageResponse::from(message)))
}

/// Users who liked a message.
#[utoipa::path(
    get,
    path = "/messages/{id}/likers",
    params(("id" = i32, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Likers", body = [UserResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown message", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "listMessageLikers"
)]
#[get("/messages/{id}/likers")]
pub async fn message_likers(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let id = parse_message_id(path.into_inner())?;
    let users = state.social.likers(id).await?;
    Ok(web::Json(users_response(users)))
}
