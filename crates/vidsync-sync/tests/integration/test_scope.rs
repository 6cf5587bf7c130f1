//! Session scope: login lifecycle, display order, ownership affordance

use std::sync::Arc;

use vidsync_cache::{CacheError, IdentityStore, MemoryStorage, ProgressTracker};
use vidsync_core::config::SyncConfig;
use vidsync_core::ports::IVideoApi;
use vidsync_sync::SessionScope;

use crate::common::{ids, vid, video, FakeCatalog};

async fn progress() -> Arc<ProgressTracker> {
    Arc::new(ProgressTracker::load(Arc::new(MemoryStorage::new())).await)
}

fn identity() -> IdentityStore {
    IdentityStore::new(Arc::new(MemoryStorage::new()))
}

#[tokio::test]
async fn test_display_list_puts_in_progress_first() {
    let catalog = FakeCatalog::with_videos(vec![
        video("C", "alice", "2025-01-01T00:00:00Z", 0),
        video("B", "alice", "2025-01-05T00:00:00Z", 0),
        video("A", "alice", "2025-01-03T00:00:00Z", 0),
    ]);
    let api: Arc<dyn IVideoApi> = catalog.clone();
    let identity = identity();
    let scope = SessionScope::login(&identity, "alice", api, progress().await, &SyncConfig::default())
        .await
        .unwrap();

    assert!(scope.refresh().await);
    assert!(scope.start_playback(&vid("A")).await);

    assert_eq!(ids(&scope.display_list()), vec!["A", "B", "C"]);
    // The cache itself stays newest-first
    assert_eq!(ids(&scope.engine().cache().snapshot()), vec!["B", "A", "C"]);
}

#[tokio::test]
async fn test_progress_is_shared_across_sessions() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let progress = progress().await;
    let identity = identity();

    let alice = SessionScope::login(
        &identity,
        "alice",
        catalog.clone(),
        progress.clone(),
        &SyncConfig::default(),
    )
    .await
    .unwrap();
    alice.start_playback(&vid("v1")).await;
    alice.logout(&identity).await.unwrap();

    let bob = SessionScope::login(&identity, "bob", catalog, progress, &SyncConfig::default())
        .await
        .unwrap();
    assert!(bob.progress().is_in_progress(&vid("v1")));
    assert!(!bob.start_playback(&vid("v1")).await);
}

#[tokio::test]
async fn test_is_owner_compares_labels() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let scope = SessionScope::login(
        &identity(),
        " alice ",
        catalog,
        progress().await,
        &SyncConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(scope.user().as_str(), "alice");
    assert!(scope.is_owner(&video("v1", "alice", "2025-01-01T00:00:00Z", 0)));
    assert!(!scope.is_owner(&video("v2", "bob", "2025-01-01T00:00:00Z", 0)));
}

#[tokio::test]
async fn test_blank_login_builds_no_scope() {
    let catalog = FakeCatalog::with_videos(vec![]);
    let result = SessionScope::login(
        &identity(),
        "  ",
        catalog,
        progress().await,
        &SyncConfig::default(),
    )
    .await;

    assert!(matches!(result, Err(CacheError::InvalidInput(_))));
}

#[tokio::test]
async fn test_resume_and_logout() {
    let catalog = FakeCatalog::with_videos(vec![video("v1", "alice", "2025-01-01T00:00:00Z", 0)]);
    let identity = identity();
    let progress = progress().await;

    let none = SessionScope::resume(&identity, catalog.clone(), progress.clone(), &SyncConfig::default())
        .await
        .unwrap();
    assert!(none.is_none());

    identity.login("alice").await.unwrap();
    let scope = SessionScope::resume(&identity, catalog.clone(), progress.clone(), &SyncConfig::default())
        .await
        .unwrap()
        .expect("identity stored, scope expected");
    assert_eq!(scope.user().as_str(), "alice");
    scope.refresh().await;
    let cache_rx = scope.engine().cache().subscribe();

    scope.logout(&identity).await.unwrap();

    assert!(identity.current().await.unwrap().is_none());
    assert!(cache_rx.borrow().is_empty());
}
