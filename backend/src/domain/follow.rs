//! Directed follow edges between users.

use std::fmt;

use super::UserId;

/// Validation errors for follow edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowValidationError {
    SelfFollow,
}

impl fmt::Display for FollowValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfFollow => write!(f, "users cannot follow themselves"),
        }
    }
}

impl std::error::Error for FollowValidationError {}

/// Edge record meaning "`follower` follows `followee`".
///
/// ## Invariants
/// - `follower` and `followee` differ.
///
/// # Examples
/// ```
/// use warbler::domain::{FollowEdge, UserId};
///
/// let a = UserId::new(1).unwrap();
/// let b = UserId::new(2).unwrap();
/// let edge = FollowEdge::new(b, a).unwrap();
/// assert_eq!(edge.follower(), b);
/// assert_eq!(edge.followee(), a);
/// assert!(FollowEdge::new(a, a).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    follower: UserId,
    followee: UserId,
}

impl FollowEdge {
    /// Build an edge, rejecting self-follows.
    pub fn new(follower: UserId, followee: UserId) -> Result<Self, FollowValidationError> {
        if follower == followee {
            return Err(FollowValidationError::SelfFollow);
        }
        Ok(Self { follower, followee })
    }

    /// User initiating the follow.
    pub fn follower(&self) -> UserId {
        self.follower
    }

    /// User being followed.
    pub fn followee(&self) -> UserId {
        self.followee
    }
}
