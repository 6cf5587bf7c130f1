//! Overlapping operations
//!
//! Calls are held open in the fake catalog so the interleaving is fixed,
//! not left to timing.

use std::sync::Arc;

use vidsync_sync::{OperationKind, Phase};

use crate::common::{engine, ids, user, vid, video, FakeCatalog};

#[tokio::test]
async fn test_failing_detail_does_not_leak_into_list_status() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = Arc::new(engine(&catalog, "alice", false));

    let gate = catalog.hold_next(OperationKind::GetVideo);
    let detail = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.get_video(&vid("nope")).await })
    };
    catalog.wait_for_calls(OperationKind::GetVideo, 1).await;

    // Detail is in flight while the list runs to completion
    assert!(engine.status(OperationKind::GetVideo).is_loading());
    assert!(engine.list_videos(&user("alice")).await);
    assert!(engine.is_loading());
    assert_eq!(engine.status(OperationKind::ListVideos).phase, Phase::Idle);

    gate.notify_one();
    assert!(detail.await.unwrap().is_none());

    assert!(engine.last_error(OperationKind::ListVideos).is_none());
    assert_eq!(
        engine.last_error(OperationKind::GetVideo).unwrap().message,
        "Failed to fetch video detail"
    );
    assert_eq!(ids(&engine.cache().snapshot()), vec!["v1"]);
    assert!(!engine.is_loading());
}

#[tokio::test]
async fn test_failing_list_does_not_clear_detail_success() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = Arc::new(engine(&catalog, "alice", false));
    catalog.fail(OperationKind::ListVideos);

    let gate = catalog.hold_next(OperationKind::ListVideos);
    let list = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.list_videos(&user("alice")).await })
    };
    catalog.wait_for_calls(OperationKind::ListVideos, 1).await;

    assert!(engine.get_video(&vid("v1")).await.is_some());
    gate.notify_one();
    assert!(!list.await.unwrap());

    assert!(engine.last_error(OperationKind::GetVideo).is_none());
    assert_eq!(
        engine.last_error(OperationKind::ListVideos).unwrap().message,
        "Failed to fetch videos"
    );
}

#[tokio::test]
async fn test_stale_list_response_is_not_applied() {
    let catalog = FakeCatalog::with_videos(vec![video("old", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = Arc::new(engine(&catalog, "alice", false));

    // First fetch snapshots ["old"] and is held
    let gate = catalog.hold_next(OperationKind::ListVideos);
    let slow = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.list_videos(&user("alice")).await })
    };
    catalog.wait_for_calls(OperationKind::ListVideos, 1).await;

    // Second fetch sees the newer server state and lands first
    catalog.set_videos(vec![video("new", "alice", "2025-02-01T00:00:00Z", 0)]);
    assert!(engine.list_videos(&user("alice")).await);
    assert_eq!(ids(&engine.cache().snapshot()), vec!["new"]);

    gate.notify_one();
    assert!(slow.await.unwrap());

    assert_eq!(ids(&engine.cache().snapshot()), vec!["new"]);
    assert_eq!(engine.status(OperationKind::ListVideos).in_flight, 0);
}

#[tokio::test]
async fn test_overlapping_lists_stay_loading_until_both_finish() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let engine = Arc::new(engine(&catalog, "alice", false));

    let gate = catalog.hold_next(OperationKind::ListVideos);
    let held = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.list_videos(&user("alice")).await })
    };
    catalog.wait_for_calls(OperationKind::ListVideos, 1).await;
    assert_eq!(engine.status(OperationKind::ListVideos).in_flight, 1);

    engine.list_videos(&user("alice")).await;
    assert!(engine.status(OperationKind::ListVideos).is_loading());

    gate.notify_one();
    held.await.unwrap();
    assert!(!engine.status(OperationKind::ListVideos).is_loading());
}

#[tokio::test]
async fn test_older_refetch_overwrites_optimistic_count_until_next_fetch() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    let engine = Arc::new(engine(&catalog, "alice", false));
    engine.list_videos(&user("alice")).await;

    // A refetch snapshots the server (count 0) and is held
    let gate = catalog.hold_next(OperationKind::ListVideos);
    let refetch = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.list_videos(&user("alice")).await })
    };
    catalog.wait_for_calls(OperationKind::ListVideos, 2).await;

    let comment =
        vidsync_core::domain::NewComment::new(vid("v1"), user("alice"), "hi").unwrap();
    engine.add_comment(&comment).await.unwrap();
    assert_eq!(engine.cache().snapshot()[0].num_comments, 1);

    // The refetch started before the post, so its snapshot is older
    gate.notify_one();
    refetch.await.unwrap();
    assert_eq!(engine.cache().snapshot()[0].num_comments, 0);

    // A fresh refetch agrees with the server again
    engine.list_videos(&user("alice")).await;
    assert_eq!(engine.cache().snapshot()[0].num_comments, 1);
}
