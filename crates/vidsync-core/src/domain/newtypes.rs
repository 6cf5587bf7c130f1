//! Domain newtypes with validation
//!
//! Identifiers in VidSync are opaque strings. Values typed in by a user go
//! through `new`, which rejects blank input. Values received from the server
//! go through `from_wire`, which trusts the server's assignment as-is.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// VideoId
// ============================================================================

/// Server-assigned identifier of a video
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Create a new VideoId from user input
    ///
    /// # Errors
    /// Returns error if the ID is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidVideoId(
                "Video ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Wrap an identifier taken verbatim from a server payload
    #[must_use]
    pub fn from_wire(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VideoId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

// ============================================================================
// CommentId
// ============================================================================

/// Server-assigned identifier of a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentId(String);

impl CommentId {
    /// Create a new CommentId
    ///
    /// # Errors
    /// Returns error if the ID is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidCommentId(
                "Comment ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Wrap an identifier taken verbatim from a server payload
    #[must_use]
    pub fn from_wire(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CommentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommentId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommentId> for String {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

// ============================================================================
// UserId
// ============================================================================

/// A user identifier: the bare label chosen at login
///
/// This is a trust-on-claim label. Comparing two `UserId`s tells the
/// presentation layer whether to offer an edit affordance; it proves nothing
/// about who is actually at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Label used when nobody is signed in
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Create a new UserId, trimming surrounding whitespace
    ///
    /// # Errors
    /// Returns error if nothing is left after trimming
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUserId(
                "User ID cannot be blank".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap an identifier taken verbatim from a server payload
    #[must_use]
    pub fn from_wire(id: String) -> Self {
        Self(id)
    }

    /// The label used for viewers without a session
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
