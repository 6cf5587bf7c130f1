//! HttpVideoProvider - IVideoApi implementation over HTTP
//!
//! Wraps the [`VideoApiClient`] and the Wire Mapper to fulfil the
//! [`IVideoApi`] port contract.
//!
//! ## Design Notes
//!
//! - Each port method issues exactly one request; no retry, no caching.
//! - Results are returned in server order. Sorting is the sync layer's job.

use tracing::debug;

use vidsync_core::domain::{Comment, NewComment, NewVideo, UserId, Video, VideoId, VideoPatch};
use vidsync_core::ports::{ApiError, IVideoApi};

use crate::client::VideoApiClient;
use crate::wire::{
    decode_comment, decode_video, CreateCommentRequest, CreateVideoRequest, EditVideoRequest,
};

/// Catalog provider speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpVideoProvider {
    client: VideoApiClient,
}

impl HttpVideoProvider {
    pub fn new(client: VideoApiClient) -> Self {
        Self { client }
    }

    /// Convenience constructor from a base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(VideoApiClient::new(base_url))
    }

    /// Returns the underlying client
    pub fn client(&self) -> &VideoApiClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl IVideoApi for HttpVideoProvider {
    async fn list_videos(&self, owner: &UserId) -> Result<Vec<Video>, ApiError> {
        let wire = self.client.fetch_videos(owner.as_str()).await?;
        Ok(wire.into_iter().map(decode_video).collect())
    }

    async fn get_video(&self, id: &VideoId) -> Result<Video, ApiError> {
        let wire = self.client.fetch_video(id.as_str()).await?;
        Ok(decode_video(wire))
    }

    async fn list_comments(&self, video_id: &VideoId) -> Result<Vec<Comment>, ApiError> {
        let wire = self.client.fetch_comments(video_id.as_str()).await?;
        Ok(wire.into_iter().map(decode_comment).collect())
    }

    async fn create_video(&self, video: &NewVideo) -> Result<(), ApiError> {
        debug!(owner = %video.user_id(), title = video.title(), "Creating video");
        self.client
            .post_video(&CreateVideoRequest::from(video))
            .await
    }

    async fn edit_video(&self, id: &VideoId, patch: &VideoPatch) -> Result<(), ApiError> {
        debug!(video_id = %id, "Editing video");
        self.client
            .put_video(&EditVideoRequest::new(id, patch))
            .await
    }

    async fn add_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        debug!(video_id = %comment.video_id(), author = %comment.user_id(), "Posting comment");
        self.client
            .post_comment(&CreateCommentRequest::from(comment))
            .await
    }
}
