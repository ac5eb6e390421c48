//! Account and user-graph handlers.
//!
//! ```text
//! POST /signup   username=Kristina&email=test1@gmail.com&password=test1
//! POST /login    username=Kristina&password=test1
//! GET  /users/{id}/followers
//! ```

use actix_web::{get, post, web};
use tracing::info;

use crate::domain::{Error, LoginCredentials, SignupRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    LoginForm, MessageResponse, SignupForm, UserResponse, messages_response, users_response,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    map_login_validation_error, map_signup_validation_error, parse_user_id,
};

/// Register a new account.
#[utoipa::path(
    post,
    path = "/signup",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username or email already taken", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    form: web::Form<SignupForm>,
) -> ApiResult<web::Json<UserResponse>> {
    let form = form.into_inner();
    let request = SignupRequest::try_from_parts(
        &form.username,
        &form.email,
        &form.password,
        form.image_url.as_deref(),
    )
    .map_err(map_signup_validation_error)?;
    let user = state.signup.signup(&request).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Check a username and password.
///
/// Unknown usernames and wrong passwords are indistinguishable to clients.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    form: web::Form<LoginForm>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials =
        LoginCredentials::try_from(form.into_inner()).map_err(map_login_validation_error)?;
    match state.login.authenticate(&credentials).await? {
        Some(user) => Ok(web::Json(UserResponse::from(user))),
        None => {
            info!(username = credentials.username(), "login rejected");
            Err(Error::unauthorized("invalid username or password"))
        }
    }
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.social.users().await?;
    Ok(web::Json(users_response(users)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.social.user(id).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Messages authored by a user, oldest first.
#[utoipa::path(
    get,
    path = "/users/{id}/messages",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Messages", body = [MessageResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserMessages"
)]
#[get("/users/{id}/messages")]
pub async fn user_messages(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<MessageResponse>>> {
    let id = parse_user_id(path.into_inner())?;
    let messages = state.social.messages(id).await?;
    Ok(web::Json(messages_response(messages)))
}

/// The user's `following` view: followers on edges naming this user as followee.
#[utoipa::path(
    get,
    path = "/users/{id}/following",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Following view", body = [UserResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listFollowing"
)]
#[get("/users/{id}/following")]
pub async fn user_following(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let id = parse_user_id(path.into_inner())?;
    let users = state.social.following(id).await?;
    Ok(web::Json(users_response(users)))
}

/// The user's `followers` view: followees on edges naming this user as follower.
#[utoipa::path(
    get,
    path = "/users/{id}/followers",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Followers view", body = [UserResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listFollowers"
)]
#[get("/users/{id}/followers")]
pub async fn user_followers(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let id = parse_user_id(path.into_inner())?;
    let users = state.social.followers(id).await?;
    Ok(web::Json(users_response(users)))
}

/// Messages this user has liked.
#[utoipa::path(
    get,
    path = "/users/{id}/likes",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Liked messages", body = [MessageResponse]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listLikedMessages"
)]
#[get("/users/{id}/likes")]
pub async fn user_likes(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<MessageResponse>>> {
    let id = parse_user_id(path.into_inner())?;
    let messages = state.social.liked_messages(id).await?;
    Ok(web::Json(messages_response(messages)))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
