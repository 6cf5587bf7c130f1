//! Progress Tracker - the "resume watching" set
//!
//! Tracks which videos the viewer has started playing. The set is stored
//! client-side only, under [`KEY_IN_PROGRESS`], as a JSON array of id strings
//! in insertion order. It is never sent to the server and outlives sessions.
//!
//! ## Design Notes
//!
//! - Loading never fails: a missing, unreadable or unparseable entry yields
//!   an empty set.
//! - A mutation is written to storage before the in-memory set changes. A
//!   failed write is logged and swallowed, so the in-memory set stays
//!   authoritative for the rest of the process.
//! - Mutations are serialized by `flush_lock`, so two concurrent marks cannot
//!   persist a set missing one of them.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use vidsync_core::domain::VideoId;
use vidsync_core::ports::{IClientStorage, KEY_IN_PROGRESS};

/// Persisted set of in-progress video ids
pub struct ProgressTracker {
    storage: Arc<dyn IClientStorage>,
    /// Insertion-ordered ids, no duplicates
    ids: watch::Sender<Vec<VideoId>>,
    flush_lock: Mutex<()>,
}

impl ProgressTracker {
    /// Reads the persisted set once and builds a tracker on top of it
    pub async fn load(storage: Arc<dyn IClientStorage>) -> Self {
        let ids = match storage.get(KEY_IN_PROGRESS).await {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read progress set, starting empty");
                Vec::new()
            }
        };

        debug!(count = ids.len(), "Loaded progress set");
        let (ids, _) = watch::channel(ids);
        Self {
            storage,
            ids,
            flush_lock: Mutex::new(()),
        }
    }

    /// Returns true when `id` has been marked
    #[must_use]
    pub fn is_in_progress(&self, id: &VideoId) -> bool {
        self.ids.borrow().contains(id)
    }

    /// Marks `id` as in progress
    ///
    /// Returns `true` if the id was newly added. Marking an id twice leaves
    /// the set, the storage entry, and subscribers untouched.
    pub async fn mark_in_progress(&self, id: &VideoId) -> bool {
        let _guard = self.flush_lock.lock().await;

        if self.is_in_progress(id) {
            return false;
        }

        let mut next = self.ids.borrow().clone();
        next.push(id.clone());

        self.flush(&next).await;
        self.ids.send_replace(next);
        info!(video_id = %id, "Marked video in progress");
        true
    }

    /// All marked ids
    #[must_use]
    pub fn all(&self) -> HashSet<VideoId> {
        self.ids.borrow().iter().cloned().collect()
    }

    /// Marked ids in the order they were first marked
    #[must_use]
    pub fn ordered(&self) -> Vec<VideoId> {
        self.ids.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }

    /// Subscribes to changes of the set
    pub fn subscribe(&self) -> watch::Receiver<Vec<VideoId>> {
        self.ids.subscribe()
    }

    async fn flush(&self, ids: &[VideoId]) {
        let encoded: Vec<&str> = ids.iter().map(VideoId::as_str).collect();
        let payload = match serde_json::to_string(&encoded) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Could not encode progress set");
                return;
            }
        };

        if let Err(e) = self.storage.set(KEY_IN_PROGRESS, &payload).await {
            warn!(error = %e, "Could not persist progress set; keeping it in memory");
        }
    }
}

/// Decodes the stored JSON array, dropping blanks and duplicates
fn parse_ids(raw: &str) -> Vec<VideoId> {
    let strings: Vec<String> = match serde_json::from_str(raw) {
        Ok(strings) => strings,
        Err(e) => {
            warn!(error = %e, "Stored progress set is not a JSON string array, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    strings
        .into_iter()
        .filter_map(|s| VideoId::new(s).ok())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
