//! Cache Store - the video list for the active session
//!
//! The list lives inside a `tokio::sync::watch` channel: the sender owns the
//! current value, subscribers see every replacement and patch.
//!
//! ## Invariants
//!
//! - After [`CacheStore::replace_all`] no two videos share an id. When the
//!   server sends duplicates, the first occurrence wins.
//! - [`CacheStore::patch_comment_count`] on an unknown id changes nothing and
//!   does not wake subscribers.
//! - Comment counts never go below zero.

use std::collections::HashSet;

use tokio::sync::watch;
use tracing::{debug, warn};

use vidsync_core::domain::{Video, VideoId};

/// Observable in-memory collection of videos
#[derive(Debug)]
pub struct CacheStore {
    videos: watch::Sender<Vec<Video>>,
}

impl CacheStore {
    /// Creates an empty store
    pub fn new() -> Self {
        let (videos, _) = watch::channel(Vec::new());
        Self { videos }
    }

    /// Replaces the whole collection, keeping the given order
    pub fn replace_all(&self, videos: Vec<Video>) {
        let incoming = videos.len();
        let mut seen = HashSet::with_capacity(incoming);
        let deduped: Vec<Video> = videos
            .into_iter()
            .filter(|v| seen.insert(v.id.clone()))
            .collect();

        if deduped.len() != incoming {
            warn!(
                incoming,
                kept = deduped.len(),
                "Dropped duplicate video ids from server payload"
            );
        }

        debug!(count = deduped.len(), "Replaced cached video list");
        self.videos.send_replace(deduped);
    }

    /// Adjusts one video's comment count by `delta`, saturating at zero
    ///
    /// Returns `false` (and notifies no one) when `id` is not cached.
    pub fn patch_comment_count(&self, id: &VideoId, delta: i64) -> bool {
        self.videos.send_if_modified(|videos| {
            match videos.iter_mut().find(|v| &v.id == id) {
                Some(video) => {
                    video.adjust_comment_count(delta);
                    debug!(video_id = %id, delta, count = video.num_comments, "Patched comment count");
                    true
                }
                None => {
                    debug!(video_id = %id, "Comment count patch for uncached video ignored");
                    false
                }
            }
        })
    }

    /// Empties the store
    pub fn clear(&self) {
        self.videos.send_replace(Vec::new());
    }

    /// Returns a copy of the current collection
    #[must_use]
    pub fn snapshot(&self) -> Vec<Video> {
        self.videos.borrow().clone()
    }

    /// Returns a copy of one cached video
    #[must_use]
    pub fn get(&self, id: &VideoId) -> Option<Video> {
        self.videos.borrow().iter().find(|v| &v.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.borrow().is_empty()
    }

    /// Subscribes to changes of the collection
    pub fn subscribe(&self) -> watch::Receiver<Vec<Video>> {
        self.videos.subscribe()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
