//! Sync Engine - the operation surface over the catalog
//!
//! Orchestrates the remote catalog ([`IVideoApi`]), the [`CacheStore`] and
//! the [`StatusBoard`]:
//!
//! ```text
//! caller ──▶ SyncEngine::op ──▶ IVideoApi (HTTP) ──▶ decode ──▶ CacheStore ──▶ subscribers
//!                 │
//!                 └──▶ StatusBoard (loading / error per operation kind)
//! ```
//!
//! ## Failure reporting
//!
//! | Operation | On failure |
//! |---|---|
//! | `list_videos`, `get_video`, `create_video`, `edit_video` | recorded on the board; returns `false` / `None` |
//! | `list_comments`, `add_comment` | recorded on the board and returned as [`SyncError`] |
//!
//! ## Ordering of list fetches
//!
//! Each `list_videos` call takes a generation number when it starts. A
//! response is applied only if no newer response has been applied already,
//! so a slow, older fetch never overwrites a fresher list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use vidsync_cache::CacheStore;
use vidsync_core::config::SyncConfig;
use vidsync_core::domain::ordering::{sort_newest_first, sort_oldest_first};
use vidsync_core::domain::{Comment, NewComment, NewVideo, UserId, Video, VideoId, VideoPatch};
use vidsync_core::ports::{ApiError, IVideoApi};

use crate::status::{
    OperationFailure, OperationKind, OperationStatus, OperationTicket, StatusBoard,
    StatusSnapshot,
};
use crate::SyncError;

/// Client-side synchronization engine for one session owner
///
/// ## Dependencies
///
/// - `api`: the remote catalog
/// - `owner`: session identity; create/edit refetch this owner's list
/// - `config.refetch_after_failed_edit`: whether a rejected edit still
///   refetches the list
pub struct SyncEngine {
    api: Arc<dyn IVideoApi>,
    owner: UserId,
    cache: CacheStore,
    status: StatusBoard,
    refetch_after_failed_edit: bool,
    /// Last generation handed out to a `list_videos` call
    issued_generation: AtomicU64,
    /// Generation of the list currently in the cache
    applied_generation: Mutex<u64>,
}

impl SyncEngine {
    /// Creates an engine with an empty cache and an idle status board
    pub fn new(api: Arc<dyn IVideoApi>, owner: UserId, config: &SyncConfig) -> Self {
        Self {
            api,
            owner,
            cache: CacheStore::new(),
            status: StatusBoard::new(),
            refetch_after_failed_edit: config.refetch_after_failed_edit,
            issued_generation: AtomicU64::new(0),
            applied_generation: Mutex::new(0),
        }
    }

    /// The session owner this engine refetches for
    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// The cached video list
    #[must_use]
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    // ========================================================================
    // Status
    // ========================================================================

    pub fn subscribe_status(&self) -> watch::Receiver<StatusSnapshot> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn status(&self, kind: OperationKind) -> OperationStatus {
        self.status.status(kind)
    }

    /// True while any operation is running
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    #[must_use]
    pub fn last_error(&self, kind: OperationKind) -> Option<OperationFailure> {
        self.status.last_error(kind)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Fetches `owner`'s videos and replaces the cache with them, newest first
    ///
    /// Returns `false` on failure; the cache is then left as it was.
    #[tracing::instrument(skip(self))]
    pub async fn list_videos(&self, owner: &UserId) -> bool {
        let generation = self.issued_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = self.status.begin(OperationKind::ListVideos);

        match self.api.list_videos(owner).await {
            Ok(mut videos) => {
                sort_newest_first(&mut videos);
                self.apply_list(generation, videos);
                ticket.succeed();
                true
            }
            Err(e) => {
                warn!(error = %e, "Video list fetch failed");
                ticket.fail(OperationFailure::from_api(OperationKind::ListVideos, &e));
                false
            }
        }
    }

    /// Fetches a single video
    ///
    /// Does not touch the cache. Returns `None` on failure.
    #[tracing::instrument(skip(self))]
    pub async fn get_video(&self, id: &VideoId) -> Option<Video> {
        let ticket = self.status.begin(OperationKind::GetVideo);

        match self.api.get_video(id).await {
            Ok(video) => {
                ticket.succeed();
                Some(video)
            }
            Err(e) => {
                warn!(error = %e, "Video detail fetch failed");
                ticket.fail(OperationFailure::from_api(OperationKind::GetVideo, &e));
                None
            }
        }
    }

    /// Fetches a video's comments, oldest first
    ///
    /// # Errors
    /// [`SyncError::FetchComments`] when the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_comments(&self, video_id: &VideoId) -> Result<Vec<Comment>, SyncError> {
        let ticket = self.status.begin(OperationKind::ListComments);

        match self.api.list_comments(video_id).await {
            Ok(mut comments) => {
                sort_oldest_first(&mut comments);
                ticket.succeed();
                Ok(comments)
            }
            Err(e) => {
                warn!(error = %e, "Comment fetch failed");
                ticket.fail(OperationFailure::from_api(OperationKind::ListComments, &e));
                Err(SyncError::FetchComments(e))
            }
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Creates a video, then refetches the owner's list
    ///
    /// Returns `false` without refetching if the server rejects the create.
    #[tracing::instrument(skip(self))]
    pub async fn create_video(&self, video: &NewVideo) -> bool {
        let ticket = self.status.begin(OperationKind::CreateVideo);

        match self.api.create_video(video).await {
            Ok(()) => {
                info!(title = video.title(), "Video created");
                self.list_videos(&self.owner).await;
                ticket.succeed();
                true
            }
            Err(e) => {
                self.reject(ticket, OperationKind::CreateVideo, &e);
                false
            }
        }
    }

    /// Applies a partial edit, then refetches the owner's list
    ///
    /// After a rejected edit the list is refetched only when
    /// `sync.refetch_after_failed_edit` is enabled.
    #[tracing::instrument(skip(self))]
    pub async fn edit_video(&self, id: &VideoId, patch: &VideoPatch) -> bool {
        let ticket = self.status.begin(OperationKind::EditVideo);

        match self.api.edit_video(id, patch).await {
            Ok(()) => {
                info!(video_id = %id, "Video edited");
                self.list_videos(&self.owner).await;
                ticket.succeed();
                true
            }
            Err(e) => {
                if self.refetch_after_failed_edit {
                    self.list_videos(&self.owner).await;
                }
                self.reject(ticket, OperationKind::EditVideo, &e);
                false
            }
        }
    }

    /// Posts a comment and bumps the cached comment count by one
    ///
    /// The new comment is not added to any comment list; refetch with
    /// [`SyncEngine::list_comments`] to show it.
    ///
    /// # Errors
    /// [`SyncError::PostComment`] when the request fails; the cache is not
    /// touched.
    #[tracing::instrument(skip(self))]
    pub async fn add_comment(&self, comment: &NewComment) -> Result<(), SyncError> {
        let ticket = self.status.begin(OperationKind::AddComment);

        match self.api.add_comment(comment).await {
            Ok(()) => {
                self.cache.patch_comment_count(comment.video_id(), 1);
                ticket.succeed();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Comment post failed");
                ticket.fail(OperationFailure::from_api(OperationKind::AddComment, &e));
                Err(SyncError::PostComment(e))
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Records a rejected mutation on the board
    fn reject(&self, ticket: OperationTicket<'_>, kind: OperationKind, error: &ApiError) {
        warn!(operation = %kind, error = %error, "Mutation rejected");
        ticket.fail(OperationFailure::from_api(kind, error));
    }

    /// Replaces the cache unless a newer list has already been applied
    fn apply_list(&self, generation: u64, videos: Vec<Video>) {
        let mut applied = self
            .applied_generation
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        if generation < *applied {
            debug!(generation, applied = *applied, "Discarding stale video list");
            return;
        }

        *applied = generation;
        self.cache.replace_all(videos);
    }
}
