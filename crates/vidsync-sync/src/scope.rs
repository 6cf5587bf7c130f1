//! Session scope
//!
//! A [`SessionScope`] is built when a user signs in and dropped when they sign
//! out. It owns that user's [`SyncEngine`] (and with it the cached list) and
//! shares the process-wide [`ProgressTracker`], which outlives sessions.
//!
//! ## Design Notes
//!
//! - Consumers receive the scope explicitly; nothing reaches for ambient
//!   state.
//! - [`SessionScope::is_owner`] only decides whether to offer editing. The
//!   identity is an unverified label, so it grants nothing on the server.

use std::sync::Arc;

use tracing::info;

use vidsync_cache::{CacheError, IdentityStore, ProgressTracker};
use vidsync_core::config::SyncConfig;
use vidsync_core::domain::ordering::sort_for_display;
use vidsync_core::domain::{UserId, Video, VideoId};
use vidsync_core::ports::IVideoApi;

use crate::engine::SyncEngine;

/// Everything tied to one signed-in user
pub struct SessionScope {
    user: UserId,
    engine: Arc<SyncEngine>,
    progress: Arc<ProgressTracker>,
}

impl SessionScope {
    /// Builds a scope for `user`
    pub fn new(
        user: UserId,
        api: Arc<dyn IVideoApi>,
        progress: Arc<ProgressTracker>,
        config: &SyncConfig,
    ) -> Self {
        let engine = Arc::new(SyncEngine::new(api, user.clone(), config));
        Self {
            user,
            engine,
            progress,
        }
    }

    /// Signs in as `name` and builds the scope for that user
    ///
    /// # Errors
    /// Blank names and identity storage failures, see [`IdentityStore::login`].
    pub async fn login(
        identity: &IdentityStore,
        name: &str,
        api: Arc<dyn IVideoApi>,
        progress: Arc<ProgressTracker>,
        config: &SyncConfig,
    ) -> Result<Self, CacheError> {
        let user = identity.login(name).await?;
        Ok(Self::new(user, api, progress, config))
    }

    /// Rebuilds the scope for the user already signed in, if any
    pub async fn resume(
        identity: &IdentityStore,
        api: Arc<dyn IVideoApi>,
        progress: Arc<ProgressTracker>,
        config: &SyncConfig,
    ) -> Result<Option<Self>, CacheError> {
        Ok(identity
            .current()
            .await?
            .map(|user| Self::new(user, api, progress, config)))
    }

    /// Signs out and tears the scope down
    pub async fn logout(self, identity: &IdentityStore) -> Result<(), CacheError> {
        identity.logout().await?;
        self.engine.cache().clear();
        info!(user = %self.user, "Session closed");
        Ok(())
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn engine(&self) -> &Arc<SyncEngine> {
        &self.engine
    }

    #[must_use]
    pub fn progress(&self) -> &Arc<ProgressTracker> {
        &self.progress
    }

    /// Whether to offer editing `video` to this user
    #[must_use]
    pub fn is_owner(&self, video: &Video) -> bool {
        video.is_owned_by(&self.user)
    }

    /// Refetches this user's videos into the cache
    pub async fn refresh(&self) -> bool {
        self.engine.list_videos(&self.user).await
    }

    /// The cached list in display order: in-progress first, then newest
    #[must_use]
    pub fn display_list(&self) -> Vec<Video> {
        sort_for_display(&self.engine.cache().snapshot(), &self.progress.all())
    }

    /// Records that playback of `id` started
    ///
    /// Returns `true` the first time for a given video.
    pub async fn start_playback(&self, id: &VideoId) -> bool {
        self.progress.mark_in_progress(id).await
    }
}
