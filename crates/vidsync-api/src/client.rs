//! Catalog API client
//!
//! A thin typed wrapper over `reqwest` with one method per catalog endpoint.
//! Methods return wire records; conversion to domain types happens in
//! [`crate::provider`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vidsync_api::client::VideoApiClient;
//!
//! # async fn example() -> Result<(), vidsync_core::ports::ApiError> {
//! let client = VideoApiClient::new("http://localhost:8000");
//! let videos = client.fetch_videos("alice").await?;
//! println!("{} videos", videos.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error mapping
//!
//! | Situation | `ApiError` |
//! |---|---|
//! | request could not be sent, or body could not be read | `Transport` |
//! | non-2xx status | `Status` |
//! | 2xx body that is not the expected JSON shape | `Decode` |

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use vidsync_core::ports::ApiError;

use crate::wire::{CommentsEnvelope, VideoEnvelope, VideosEnvelope, WireComment, WireVideo};

/// Default base URL, matching the default configuration
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// ============================================================================
// VideoApiClient
// ============================================================================

/// HTTP client for the catalog API
#[derive(Debug, Clone)]
pub struct VideoApiClient {
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl VideoApiClient {
    /// Creates a client for the given base URL
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Returns the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a request builder for `path` relative to the base URL
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    // ------------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------------

    /// `GET /videos?user_id={owner}`
    pub async fn fetch_videos(&self, owner: &str) -> Result<Vec<WireVideo>, ApiError> {
        let request = self
            .request(Method::GET, "/videos")
            .query(&[("user_id", owner)]);
        let envelope: VideosEnvelope = self.send_json(request, "GET /videos").await?;
        debug!(owner, count = envelope.videos.len(), "Fetched video list");
        Ok(envelope.videos)
    }

    /// `GET /videos/single?video_id={id}`
    pub async fn fetch_video(&self, video_id: &str) -> Result<WireVideo, ApiError> {
        let request = self
            .request(Method::GET, "/videos/single")
            .query(&[("video_id", video_id)]);
        let envelope: VideoEnvelope = self.send_json(request, "GET /videos/single").await?;
        Ok(envelope.video)
    }

    /// `GET /videos/comments?video_id={id}`
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<WireComment>, ApiError> {
        let request = self
            .request(Method::GET, "/videos/comments")
            .query(&[("video_id", video_id)]);
        let envelope: CommentsEnvelope =
            self.send_json(request, "GET /videos/comments").await?;
        debug!(video_id, count = envelope.comments.len(), "Fetched comments");
        Ok(envelope.comments)
    }

    /// `POST /videos`
    pub async fn post_video<B: Serialize + ?Sized>(&self, body: &B) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/videos").json(body);
        self.send_unit(request, "POST /videos").await
    }

    /// `PUT /videos`
    pub async fn put_video<B: Serialize + ?Sized>(&self, body: &B) -> Result<(), ApiError> {
        let request = self.request(Method::PUT, "/videos").json(body);
        self.send_unit(request, "PUT /videos").await
    }

    /// `POST /videos/comments`
    pub async fn post_comment<B: Serialize + ?Sized>(&self, body: &B) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/videos/comments").json(body);
        self.send_unit(request, "POST /videos/comments").await
    }

    // ------------------------------------------------------------------------
    // Request execution
    // ------------------------------------------------------------------------

    /// Sends `request` and checks the status code
    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "Request failed before a response arrived");
            ApiError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "Server returned error status");
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Sends `request` and decodes a JSON body of type `T`
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, endpoint).await?;
        let body = response.text().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: format!("failed to read body: {e}"),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(endpoint, error = %e, "Response body did not match expected shape");
            ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Sends `request`, ignoring any response body
    async fn send_unit(&self, request: RequestBuilder, endpoint: &str) -> Result<(), ApiError> {
        self.send(request, endpoint).await?;
        debug!(endpoint, "Request accepted");
        Ok(())
    }
}

impl Default for VideoApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
