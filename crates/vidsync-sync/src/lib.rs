//! VidSync Sync - client-side synchronization engine
//!
//! Provides:
//! - The six catalog operations with per-operation loading/error state
//! - Ordering of overlapping list fetches
//! - Session scoping of the cached list
//!
//! ## Modules
//!
//! - [`engine`] - Operation surface orchestrating API, cache and status
//! - [`status`] - Per-operation status board
//! - [`scope`] - Session scope built at login, dropped at logout

pub mod engine;
pub mod scope;
pub mod status;

pub use engine::SyncEngine;
pub use scope::SessionScope;
pub use status::{FailureKind, OperationFailure, OperationKind, OperationStatus, Phase};

use thiserror::Error;
use vidsync_core::ports::ApiError;

/// Errors returned to callers by the comment operations
///
/// List, detail, create and edit failures are not returned; they are
/// recorded on the status board instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Comments for a video could not be fetched
    #[error("Failed to fetch comments: {0}")]
    FetchComments(#[source] ApiError),

    /// A comment could not be posted
    #[error("Failed to post comment: {0}")]
    PostComment(#[source] ApiError),
}

impl SyncError {
    /// The underlying API error
    pub fn api_error(&self) -> &ApiError {
        match self {
            SyncError::FetchComments(e) | SyncError::PostComment(e) => e,
        }
    }
}
