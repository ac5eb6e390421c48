//! Turns domain errors and extractor rejections into Warbler's JSON error
//! responses.
//!
//! Every failure leaves the server as `{code, message, traceId?, details?}`
//! with the status derived from `code`. Store failures are redacted here, so
//! handlers can propagate [`Error`] with `?` and never format a response by
//! hand. Form and path extractors are configured in [`extractor_config`] so
//! that a malformed body or id gets the same shape as a validation failure.

use actix_web::error::{PathError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{debug, error};

use super::validation::{invalid_form, invalid_path_id};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers; the error renders itself as a response.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        match self.code() {
            ErrorCode::InternalError => {
                error!(detail = self.message(), "store failure hidden from client");
                response.json(public_view(self))
            }
            _ => response.json(self),
        }
    }
}

/// The body clients see: internal errors lose message and details.
fn public_view(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

/// Pull the field name out of serde's "missing field `name`" wording.
fn missing_field(reason: &str) -> Option<&str> {
    let (_, rest) = reason.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

fn form_rejected(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let reason = err.to_string();
    debug!(%reason, "form body rejected");
    invalid_form(missing_field(&reason), reason.as_str()).into()
}

fn path_rejected(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "path segment rejected");
    invalid_path_id(err.to_string()).into()
}

/// Route form and path extractor failures through [`Error`].
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_rejected))
        .app_data(web::PathConfig::default().error_handler(path_rejected));
}
