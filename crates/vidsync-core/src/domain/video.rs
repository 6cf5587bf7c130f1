//! Video entity and its write-side field sets
//!
//! [`Video`] is the internal shape every consumer sees. Serialization uses
//! camelCase keys (`userId`, `videoUrl`, `createdAt`, `numComments`), the
//! snake_case wire shape lives in the API adapter.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{UserId, VideoId};

/// A video record as held by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Server-assigned identifier
    pub id: VideoId,
    /// Identifier of the user that owns the video
    pub user_id: UserId,
    pub title: String,
    /// Source URL of the media
    pub video_url: String,
    pub description: String,
    /// ISO-8601 creation timestamp, assigned by the server
    pub created_at: String,
    /// Number of comments, maintained by the server
    pub num_comments: u32,
}

impl Video {
    /// Parse the creation timestamp
    ///
    /// Returns `None` when the server sent something that is not ISO-8601.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Returns true when `viewer` is the owner of this video
    ///
    /// Display affordance only: identifiers are unauthenticated labels.
    #[must_use]
    pub fn is_owned_by(&self, viewer: &UserId) -> bool {
        &self.user_id == viewer
    }

    /// Apply a local comment-count adjustment, saturating at zero
    pub fn adjust_comment_count(&mut self, delta: i64) {
        let next = i64::from(self.num_comments).saturating_add(delta);
        self.num_comments = next.clamp(0, i64::from(u32::MAX)) as u32;
    }
}

/// Offset-less layouts, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp into UTC
///
/// Timestamps without an offset are taken to be UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

// ============================================================================
// NewVideo
// ============================================================================

/// Fields required to create a video
///
/// All four fields are required and must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    title: String,
    video_url: String,
    description: String,
    user_id: UserId,
}

impl NewVideo {
    /// Create a validated field set
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] for the first blank field
    pub fn new(
        title: impl Into<String>,
        video_url: impl Into<String>,
        description: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let video_url = video_url.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        if video_url.trim().is_empty() {
            return Err(DomainError::MissingField("video_url"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::MissingField("description"));
        }

        Ok(Self {
            title,
            video_url,
            description,
            user_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

// ============================================================================
// VideoPatch
// ============================================================================

/// A partial edit of a video
///
/// Unset fields are left untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

impl VideoPatch {
    /// Start an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    /// Returns true when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.video_url.is_none()
    }
}
