//! Remote video catalog port (driven/secondary port)
//!
//! This module defines the interface to the catalog server. The production
//! implementation speaks JSON over HTTP; tests substitute in-process fakes.
//!
//! ## Design Notes
//!
//! - Errors are a typed [`ApiError`]: the sync layer reports HTTP/transport
//!   failures and malformed payloads differently.
//! - Uses `#[async_trait]` for async trait methods.
//! - Results are already in the internal domain shape; the wire shape never
//!   crosses this boundary.

use thiserror::Error;

use crate::domain::{Comment, NewComment, NewVideo, UserId, Video, VideoId, VideoPatch};

// ============================================================================
// ApiError
// ============================================================================

/// Errors raised by a catalog adapter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Request line, e.g. `GET /videos`
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response (DNS, refused connection, reset)
    #[error("Transport error on {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// A 2xx response whose body does not match the expected shape
    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Returns true for malformed-payload failures
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// Returns the HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The request line the error belongs to
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Status { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

// ============================================================================
// IVideoApi trait
// ============================================================================

/// Port trait for the remote video catalog
///
/// Every method maps to exactly one HTTP request. Implementations do not
/// retry, cache, or reorder results beyond what the server returns.
#[async_trait::async_trait]
pub trait IVideoApi: Send + Sync {
    /// Lists the videos owned by `owner`, in server order
    async fn list_videos(&self, owner: &UserId) -> Result<Vec<Video>, ApiError>;

    /// Fetches a single video
    async fn get_video(&self, id: &VideoId) -> Result<Video, ApiError>;

    /// Lists the comments of a video, in server order
    async fn list_comments(&self, video_id: &VideoId) -> Result<Vec<Comment>, ApiError>;

    /// Creates a video; the server assigns id, timestamp and comment count
    async fn create_video(&self, video: &NewVideo) -> Result<(), ApiError>;

    /// Applies a partial edit; unset fields are not sent
    async fn edit_video(&self, id: &VideoId, patch: &VideoPatch) -> Result<(), ApiError>;

    /// Posts a comment
    async fn add_comment(&self, comment: &NewComment) -> Result<(), ApiError>;
}
