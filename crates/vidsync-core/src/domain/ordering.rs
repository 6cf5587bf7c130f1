//! Ordering rules for videos and comments
//!
//! - The cached list is kept newest-first by creation timestamp.
//! - Comments are shown oldest-first.
//! - The list view puts in-progress videos first, then newest-first within
//!   each group.
//!
//! All sorts are stable. Timestamps that fail to parse sort as older than any
//! parseable timestamp; two unparseable timestamps compare equal.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::comment::Comment;
use super::newtypes::VideoId;
use super::video::Video;

/// Compare two optional timestamps, unparseable ones first
fn compare_created(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Sort videos newest-first by creation timestamp
pub fn sort_newest_first(videos: &mut [Video]) {
    videos.sort_by(|a, b| compare_created(b.created_at_utc(), a.created_at_utc()));
}

/// Sort comments oldest-first by creation timestamp
pub fn sort_oldest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| compare_created(a.created_at_utc(), b.created_at_utc()));
}

/// Order videos for the list view
///
/// In-progress videos come first; within each group the newest video comes
/// first. The input is not modified.
pub fn sort_for_display(videos: &[Video], in_progress: &HashSet<VideoId>) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by(|a, b| {
        let a_started = in_progress.contains(&a.id);
        let b_started = in_progress.contains(&b.id);
        b_started
            .cmp(&a_started)
            .then_with(|| compare_created(b.created_at_utc(), a.created_at_utc()))
    });
    sorted
}
