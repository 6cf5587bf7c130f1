//! Engine operations against the fake catalog, one at a time

use vidsync_core::domain::{NewComment, NewVideo, VideoPatch};
use vidsync_sync::{FailureKind, OperationKind, SyncError};

use crate::common::{comment, engine, ids, user, vid, video, FakeCatalog};

// ============================================================================
// list_videos
// ============================================================================

#[tokio::test]
async fn test_list_videos_caches_owner_videos_newest_first() {
    let catalog = FakeCatalog::with_videos(vec![
        video("old", "alice", "2025-01-01T00:00:00Z", 0),
        video("other", "bob", "2025-06-01T00:00:00Z", 0),
        video("new", "alice", "2025-03-01T00:00:00Z", 0),
    ]);
    let engine = engine(&catalog, "alice", false);

    assert!(engine.list_videos(&user("alice")).await);

    assert_eq!(ids(&engine.cache().snapshot()), vec!["new", "old"]);
    assert!(engine.last_error(OperationKind::ListVideos).is_none());
    assert!(!engine.is_loading());
}

#[tokio::test]
async fn test_list_videos_replaces_never_merges() {
    let catalog = FakeCatalog::with_videos(vec![
        video("a", "alice", "2025-01-01T00:00:00Z", 0),
        video("b", "alice", "2025-01-02T00:00:00Z", 0),
    ]);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;

    catalog.set_videos(vec![
        video("c", "alice", "2025-01-03T00:00:00Z", 0),
        video("d", "alice", "2025-01-04T00:00:00Z", 0),
    ]);
    engine.list_videos(&user("alice")).await;

    assert_eq!(ids(&engine.cache().snapshot()), vec!["d", "c"]);
}

#[tokio::test]
async fn test_list_failure_keeps_last_good_list() {
    let catalog = FakeCatalog::with_videos(vec![video("a", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;

    catalog.fail(OperationKind::ListVideos);
    assert!(!engine.list_videos(&user("alice")).await);

    assert_eq!(ids(&engine.cache().snapshot()), vec!["a"]);
    let failure = engine.last_error(OperationKind::ListVideos).unwrap();
    assert_eq!(failure.kind, FailureKind::Transport);
    assert_eq!(failure.message, "Failed to fetch videos");
}

#[tokio::test]
async fn test_malformed_list_is_a_decode_failure() {
    let catalog = FakeCatalog::with_videos(vec![]);
    catalog.corrupt(OperationKind::ListVideos);
    let engine = engine(&catalog, "alice", false);

    assert!(!engine.list_videos(&user("alice")).await);

    let failure = engine.last_error(OperationKind::ListVideos).unwrap();
    assert_eq!(failure.kind, FailureKind::Decode);
    assert_eq!(failure.message, "Failed to fetch videos: malformed response");
}

#[tokio::test]
async fn test_next_call_clears_previous_error() {
    let catalog = FakeCatalog::with_videos(vec![]);
    catalog.fail(OperationKind::ListVideos);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;
    assert!(engine.last_error(OperationKind::ListVideos).is_some());

    catalog.recover(OperationKind::ListVideos);
    assert!(engine.list_videos(&user("alice")).await);
    assert!(engine.last_error(OperationKind::ListVideos).is_none());
}

// ============================================================================
// get_video / list_comments
// ============================================================================

#[tokio::test]
async fn test_get_video_returns_record_without_caching() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "bob", "2025-01-01T00:00:00Z", 2)]);
    let engine = engine(&catalog, "alice", false);

    let fetched = engine.get_video(&vid("v1")).await.unwrap();

    assert_eq!(fetched.user_id.as_str(), "bob");
    assert!(engine.cache().is_empty());
}

#[tokio::test]
async fn test_get_video_failure_returns_none() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let engine = engine(&catalog, "alice", false);

    assert!(engine.get_video(&vid("missing")).await.is_none());
    assert_eq!(
        engine.last_error(OperationKind::GetVideo).unwrap().message,
        "Failed to fetch video detail"
    );
}

#[tokio::test]
async fn test_list_comments_oldest_first() {
    let catalog = FakeCatalog::with_videos(vec![]);
    catalog.set_comments(vec![
        comment("late", "v1", "2025-01-03T00:00:00Z"),
        comment("elsewhere", "v2", "2025-01-01T00:00:00Z"),
        comment("early", "v1", "2025-01-01T00:00:00Z"),
    ]);
    let engine = engine(&catalog, "alice", false);

    let comments = engine.list_comments(&vid("v1")).await.unwrap();

    let order: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["early", "late"]);
}

#[tokio::test]
async fn test_list_comments_failure_is_returned() {
    let catalog = FakeCatalog::with_videos(vec![]);
    catalog.fail(OperationKind::ListComments);
    let engine = engine(&catalog, "alice", false);

    let err = engine.list_comments(&vid("v1")).await.unwrap_err();

    assert!(matches!(err, SyncError::FetchComments(_)));
    assert_eq!(err.api_error().status(), Some(500));
    assert!(engine.last_error(OperationKind::ListComments).is_some());
}

// ============================================================================
// create_video / edit_video
// ============================================================================

fn new_video(owner: &str) -> NewVideo {
    NewVideo::new("Fresh", "https://cdn.example.com/fresh.mp4", "Brand new", user(owner)).unwrap()
}

#[tokio::test]
async fn test_create_video_refetches_list() {
    let catalog = FakeCatalog::with_videos(vec![video("a", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = engine(&catalog, "alice", false);

    assert!(engine.create_video(&new_video("alice")).await);

    assert_eq!(catalog.calls(OperationKind::ListVideos), 1);
    let cached = engine.cache().snapshot();
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].title, "Fresh");
}

#[tokio::test]
async fn test_create_video_failure_skips_refetch() {
    let catalog = FakeCatalog::with_videos(vec![]);
    catalog.fail(OperationKind::CreateVideo);
    let engine = engine(&catalog, "alice", false);

    assert!(!engine.create_video(&new_video("alice")).await);

    assert_eq!(catalog.calls(OperationKind::ListVideos), 0);
    assert_eq!(
        engine.last_error(OperationKind::CreateVideo).unwrap().message,
        "Failed to add video"
    );
}

#[tokio::test]
async fn test_edit_video_refetches_on_success() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;

    let patch = VideoPatch::new().title("Renamed");
    assert!(engine.edit_video(&vid("v1"), &patch).await);

    assert_eq!(catalog.calls(OperationKind::ListVideos), 2);
    assert_eq!(engine.cache().snapshot()[0].title, "Renamed");
    assert_eq!(engine.cache().snapshot()[0].description, "About v1");
}

#[tokio::test]
async fn test_failed_edit_does_not_refetch_by_default() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    catalog.fail(OperationKind::EditVideo);
    let engine = engine(&catalog, "alice", false);

    assert!(!engine.edit_video(&vid("v1"), &VideoPatch::new().title("x")).await);

    assert_eq!(catalog.calls(OperationKind::ListVideos), 0);
    assert_eq!(
        engine.last_error(OperationKind::EditVideo).unwrap().message,
        "Failed to edit video"
    );
}

#[tokio::test]
async fn test_failed_edit_refetches_when_configured() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    catalog.fail(OperationKind::EditVideo);
    let engine = engine(&catalog, "alice", true);

    assert!(!engine.edit_video(&vid("v1"), &VideoPatch::new().title("x")).await);

    assert_eq!(catalog.calls(OperationKind::ListVideos), 1);
    assert_eq!(ids(&engine.cache().snapshot()), vec!["v1"]);
    assert!(engine.last_error(OperationKind::EditVideo).is_some());
    assert!(engine.last_error(OperationKind::ListVideos).is_none());
}

// ============================================================================
// add_comment
// ============================================================================

#[tokio::test]
async fn test_add_comment_bumps_exactly_one_count() {
    let catalog = FakeCatalog::with_videos(vec![
        video("v1", "alice", "2025-01-02T00:00:00Z", 0),
        video("v2", "alice", "2025-01-01T00:00:00Z", 7),
    ]);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;

    let comment = NewComment::new(vid("v1"), user("alice"), "hi").unwrap();
    engine.add_comment(&comment).await.unwrap();

    let cached = engine.cache().snapshot();
    assert_eq!(cached[0].num_comments, 1);
    assert_eq!(cached[1].num_comments, 7);
    assert_eq!(catalog.calls(OperationKind::ListVideos), 1);
    assert_eq!(catalog.server_videos()[0].num_comments, 1);
}

#[tokio::test]
async fn test_add_comment_failure_leaves_cache_untouched() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 3)]);
    let engine = engine(&catalog, "alice", false);
    engine.list_videos(&user("alice")).await;
    catalog.fail(OperationKind::AddComment);

    let comment = NewComment::new(vid("v1"), user("alice"), "hi").unwrap();
    let err = engine.add_comment(&comment).await.unwrap_err();

    assert!(matches!(err, SyncError::PostComment(_)));
    assert_eq!(engine.cache().snapshot()[0].num_comments, 3);
}

#[tokio::test]
async fn test_add_comment_on_uncached_video_succeeds() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "bob", "2025-01-01T00:00:00Z", 0)]);
    let engine = engine(&catalog, "alice", false);

    let comment = NewComment::new(vid("v1"), user("alice"), "nice one").unwrap();
    assert!(engine.add_comment(&comment).await.is_ok());
    assert!(engine.cache().is_empty());

    let comments = engine.list_comments(&vid("v1")).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "nice one");
}

#[tokio::test]
async fn test_status_subscription_reports_finished_call() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let engine = engine(&catalog, "alice", false);
    let mut rx = engine.subscribe_status();

    engine.list_videos(&user("alice")).await;

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert!(!snapshot.is_loading());
    assert!(snapshot.get(OperationKind::ListVideos).error.is_none());
}
