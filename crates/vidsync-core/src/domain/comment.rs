//! Comment entity and its write-side field set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{CommentId, UserId, VideoId};
use super::video::parse_timestamp;

/// A comment on a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Parent video, fixed at creation
    pub video_id: VideoId,
    /// Author label
    pub user_id: UserId,
    pub content: String,
    /// ISO-8601 creation timestamp, assigned by the server
    pub created_at: String,
}

impl Comment {
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Fields required to post a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    video_id: VideoId,
    user_id: UserId,
    content: String,
}

impl NewComment {
    /// Create a validated comment
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] when the content is blank
    pub fn new(
        video_id: VideoId,
        user_id: UserId,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::MissingField("content"));
        }
        Ok(Self {
            video_id,
            user_id,
            content,
        })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
