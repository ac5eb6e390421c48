//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every validation failure becomes an `invalid_request` error whose
//! `details` name the offending field and a stable reason code.

use serde_json::json;

use crate::domain::{
    Error, LoginValidationError, MessageId, SignupValidationError, UserId, UserValidationError,
};

/// Reason codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyUsername,
    InvalidUsername,
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
    InvalidId,
    InvalidForm,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyUsername => "empty_username",
            ErrorCode::InvalidUsername => "invalid_username",
            ErrorCode::EmptyEmail => "empty_email",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::EmptyPassword => "empty_password",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidForm => "invalid_form",
        }
    }
}

fn field_error(field: &str, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn map_signup_validation_error(err: SignupValidationError) -> Error {
    let code = match &err {
        SignupValidationError::Username(UserValidationError::EmptyUsername) => {
            ErrorCode::EmptyUsername
        }
        SignupValidationError::Username(_) => ErrorCode::InvalidUsername,
        SignupValidationError::Email(UserValidationError::EmptyEmail) => ErrorCode::EmptyEmail,
        SignupValidationError::Email(_) => ErrorCode::InvalidEmail,
        SignupValidationError::EmptyPassword => ErrorCode::EmptyPassword,
    };
    field_error(err.field(), code, err.to_string())
}

pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => {
            field_error("username", ErrorCode::EmptyUsername, err.to_string())
        }
        LoginValidationError::EmptyPassword => {
            field_error("password", ErrorCode::EmptyPassword, err.to_string())
        }
    }
}

/// A form body that could not be decoded; `field` is set when serde named it.
pub(crate) fn invalid_form(field: Option<&str>, message: &str) -> Error {
    match field {
        Some(name) => field_error(name, ErrorCode::InvalidForm, message),
        None => Error::invalid_request(message).with_details(json!({
            "code": ErrorCode::InvalidForm.as_str(),
        })),
    }
}

pub(crate) fn invalid_path_id(message: impl Into<String>) -> Error {
    field_error("id", ErrorCode::InvalidId, message)
}

pub(crate) fn parse_user_id(raw: i32) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| invalid_path_id(err.to_string()))
}

pub(crate) fn parse_message_id(raw: i32) -> Result<MessageId, Error> {
    MessageId::new(raw).map_err(|err| invalid_path_id(err.to_string()))
}
