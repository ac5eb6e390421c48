//! User data model.
//!
//! A [`User`] is the root entity of the social graph. Its username and email
//! are globally unique; the store enforces this and reports collisions as
//! uniqueness violations.

use std::fmt;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NonPositiveId,
    EmptyUsername,
    UsernameTooLong { max: usize },
    UsernameContainsWhitespace,
    EmptyEmail,
    InvalidEmail,
    EmptyImageUrl,
    EmptyPasswordHash,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "user id must be a positive integer"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameContainsWhitespace => write!(f, "username must not contain whitespace"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::EmptyImageUrl => write!(f, "image url must not be empty"),
            Self::EmptyPasswordHash => write!(f, "password hash must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Numeric user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Wrap an identifier read back from the store.
    pub(crate) fn from_store(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 30;

/// Unique handle chosen at signup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`]; surrounding whitespace is trimmed.
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::UsernameContainsWhitespace);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_address::EmailAddress::is_valid(trimmed) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image shown when a user signs up without one.
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// Profile image location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validate and construct an [`ImageUrl`].
    pub fn new(url: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyImageUrl);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Resolve optional user input, falling back to [`DEFAULT_IMAGE_URL`]
    /// when absent or blank.
    pub fn or_default(url: Option<&str>) -> Self {
        url.and_then(|value| Self::new(value).ok())
            .unwrap_or_default()
    }
}

impl Default for ImageUrl {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_URL.to_owned())
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// One-way salted password hash in PHC string format.
///
/// The `Debug` output is redacted so hashes never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Result<Self, UserValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Persisted application user.
///
/// Both `Display` and `Debug` render `<User #{id}: {username}, {email}>`,
/// so a `Vec<User>` debug-prints as a bracketed list of those strings.
///
/// # Examples
/// ```
/// use warbler::domain::{Email, ImageUrl, PasswordHash, User, UserId, Username};
///
/// let user = User::new(
///     UserId::new(5000).unwrap(),
///     Username::new("testuser1").unwrap(),
///     Email::new("test1@test.com").unwrap(),
///     ImageUrl::default(),
///     PasswordHash::new("HASHED_PASSWORD").unwrap(),
/// );
/// assert_eq!(user.to_string(), "<User #5000: testuser1, test1@test.com>");
/// assert_eq!(format!("{:?}", vec![user]), "[<User #5000: testuser1, test1@test.com>]");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    image_url: ImageUrl,
    password_hash: PasswordHash,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(
        id: UserId,
        username: Username,
        email: Email,
        image_url: ImageUrl,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            username,
            email,
            image_url,
            password_hash,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Profile image location.
    pub fn image_url(&self) -> &ImageUrl {
        &self.image_url
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Displays a slice of users as `[<User #1: a, a@x>, <User #2: b, b@x>]`.
pub struct UserList<'a>(pub &'a [User]);

impl fmt::Display for UserList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, user) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{user}")?;
        }
        f.write_str("]")
    }
}

/// User record awaiting insertion.
///
/// `id` is normally left unset so the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub username: Username,
    pub email: Email,
    pub image_url: ImageUrl,
    pub password_hash: PasswordHash,
}

impl NewUser {
    /// Start a record with a store-assigned id and the default image.
    pub fn new(username: Username, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: None,
            username,
            email,
            image_url: ImageUrl::default(),
            password_hash,
        }
    }

    /// Request a specific identifier.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Use a specific profile image.
    pub fn with_image_url(mut self, image_url: ImageUrl) -> Self {
        self.image_url = image_url;
        self
    }

    /// Materialise the stored user once the store has chosen an id.
    pub(crate) fn into_user(self, id: UserId) -> User {
        User::new(
            id,
            self.username,
            self.email,
            self.image_url,
            self.password_hash,
        )
    }
}

#[cfg(test)]
mod tests;
