//! Wire Mapper
//!
//! Converts between the catalog's snake_case JSON records and the domain
//! types in `vidsync-core`.
//!
//! ## Design Notes
//!
//! - Decoding renames fields only. Identifiers are taken verbatim via
//!   `from_wire`; nothing is validated or defaulted.
//! - A record missing a field, or carrying one of the wrong type, fails in
//!   `serde_json` before it reaches this module. The client reports that as
//!   `ApiError::Decode`.
//! - Write requests omit unset optional fields entirely (never `null`, never
//!   `""`), so a partial edit leaves the server's other values alone.

use serde::{Deserialize, Serialize};

use vidsync_core::domain::{
    Comment, CommentId, NewComment, NewVideo, UserId, Video, VideoId, VideoPatch,
};

// ============================================================================
// Read-side records
// ============================================================================

/// A video as the server sends it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireVideo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub video_url: String,
    pub description: String,
    pub created_at: String,
    pub num_comments: u32,
}

/// A comment as the server sends it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireComment {
    pub id: String,
    pub video_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: String,
}

/// `GET /videos` response body
#[derive(Debug, Deserialize)]
pub struct VideosEnvelope {
    pub videos: Vec<WireVideo>,
}

/// `GET /videos/single` response body
#[derive(Debug, Deserialize)]
pub struct VideoEnvelope {
    pub video: WireVideo,
}

/// `GET /videos/comments` response body
#[derive(Debug, Deserialize)]
pub struct CommentsEnvelope {
    pub comments: Vec<WireComment>,
}

/// Convert a wire video into the domain shape
pub fn decode_video(wire: WireVideo) -> Video {
    Video {
        id: VideoId::from_wire(wire.id),
        user_id: UserId::from_wire(wire.user_id),
        title: wire.title,
        video_url: wire.video_url,
        description: wire.description,
        created_at: wire.created_at,
        num_comments: wire.num_comments,
    }
}

/// Convert a domain video back into the wire shape
pub fn encode_video(video: &Video) -> WireVideo {
    WireVideo {
        id: video.id.to_string(),
        user_id: video.user_id.to_string(),
        title: video.title.clone(),
        video_url: video.video_url.clone(),
        description: video.description.clone(),
        created_at: video.created_at.clone(),
        num_comments: video.num_comments,
    }
}

/// Convert a wire comment into the domain shape
pub fn decode_comment(wire: WireComment) -> Comment {
    Comment {
        id: CommentId::from_wire(wire.id),
        video_id: VideoId::from_wire(wire.video_id),
        user_id: UserId::from_wire(wire.user_id),
        content: wire.content,
        created_at: wire.created_at,
    }
}

/// Convert a domain comment back into the wire shape
pub fn encode_comment(comment: &Comment) -> WireComment {
    WireComment {
        id: comment.id.to_string(),
        video_id: comment.video_id.to_string(),
        user_id: comment.user_id.to_string(),
        content: comment.content.clone(),
        created_at: comment.created_at.clone(),
    }
}

// ============================================================================
// Write-side requests
// ============================================================================

/// `POST /videos` request body
#[derive(Debug, Serialize)]
pub struct CreateVideoRequest<'a> {
    pub user_id: &'a str,
    pub description: &'a str,
    pub video_url: &'a str,
    pub title: &'a str,
}

impl<'a> From<&'a NewVideo> for CreateVideoRequest<'a> {
    fn from(video: &'a NewVideo) -> Self {
        Self {
            user_id: video.user_id().as_str(),
            description: video.description(),
            video_url: video.video_url(),
            title: video.title(),
        }
    }
}

/// `PUT /videos` request body
#[derive(Debug, Serialize)]
pub struct EditVideoRequest<'a> {
    pub video_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
}

impl<'a> EditVideoRequest<'a> {
    pub fn new(id: &'a VideoId, patch: &'a VideoPatch) -> Self {
        Self {
            video_id: id.as_str(),
            description: patch.description.as_deref(),
            video_url: patch.video_url.as_deref(),
            title: patch.title.as_deref(),
        }
    }
}

/// `POST /videos/comments` request body
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub video_id: &'a str,
    pub user_id: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a NewComment> for CreateCommentRequest<'a> {
    fn from(comment: &'a NewComment) -> Self {
        Self {
            video_id: comment.video_id().as_str(),
            user_id: comment.user_id().as_str(),
            content: comment.content(),
        }
    }
}
