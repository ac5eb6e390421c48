//! Authentication primitives: signup requests and login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{Email, ImageUrl, UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use warbler::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Kristina", "test1").unwrap();
/// assert_eq!(creds.username(), "Kristina");
/// assert_eq!(creds.password(), "test1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain error returned when signup payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    /// Username failed validation.
    Username(UserValidationError),
    /// Email failed validation.
    Email(UserValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl SignupValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Username(_) => "username",
            Self::Email(_) => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) | Self::Email(err) => write!(f, "{err}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for SignupValidationError {}

/// Validated signup request.
///
/// The plaintext password is held in zeroizing storage and only ever leaves
/// this type through the password hasher.
///
/// # Examples
/// ```
/// use warbler::domain::SignupRequest;
///
/// let request = SignupRequest::try_from_parts("Kristina", "test1@gmail.com", "test1", None).unwrap();
/// assert_eq!(request.username().as_ref(), "Kristina");
/// assert_eq!(request.image_url().as_ref(), "/static/images/default-pic.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
    image_url: ImageUrl,
}

impl SignupRequest {
    /// Validate raw signup inputs. A blank or missing image falls back to
    /// the default avatar.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
        image_url: Option<&str>,
    ) -> Result<Self, SignupValidationError> {
        let username = Username::new(username).map_err(SignupValidationError::Username)?;
        let email = Email::new(email).map_err(SignupValidationError::Email)?;
        if password.is_empty() {
            return Err(SignupValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            email,
            password: Zeroizing::new(password.to_owned()),
            image_url: ImageUrl::or_default(image_url),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Profile image.
    pub fn image_url(&self) -> &ImageUrl {
        &self.image_url
    }
}
