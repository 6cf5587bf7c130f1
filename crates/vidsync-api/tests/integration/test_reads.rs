//! Read endpoints: list, single, comments

use vidsync_core::domain::{UserId, VideoId};
use vidsync_core::ports::IVideoApi;

use crate::common;

#[tokio::test]
async fn test_list_videos_decodes_in_server_order() {
    let (server, provider) = common::setup_catalog_mock().await;
    common::mount_video_list(
        &server,
        "alice",
        serde_json::json!([
            common::video_json("v1", "alice", "2025-01-01T00:00:00Z", 0),
            common::video_json("v2", "alice", "2025-02-01T00:00:00Z", 3),
        ]),
    )
    .await;

    let videos = provider
        .list_videos(&UserId::new("alice").unwrap())
        .await
        .expect("list_videos failed");

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id.as_str(), "v1");
    assert_eq!(videos[1].id.as_str(), "v2");
    assert_eq!(videos[1].num_comments, 3);
    assert_eq!(videos[1].video_url, "https://cdn.example.com/v2.mp4");
}

#[tokio::test]
async fn test_list_videos_encodes_owner_query() {
    let (server, provider) = common::setup_catalog_mock().await;
    common::mount_video_list(&server, "a b&c", serde_json::json!([])).await;

    let videos = provider
        .list_videos(&UserId::new("a b&c").unwrap())
        .await
        .expect("owner with reserved characters should be URL-encoded");
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_get_video_unwraps_envelope() {
    let (server, provider) = common::setup_catalog_mock().await;
    common::mount_single_video(
        &server,
        "v7",
        common::video_json("v7", "bob", "2025-05-05T05:05:05Z", 12),
    )
    .await;

    let video = provider
        .get_video(&VideoId::new("v7").unwrap())
        .await
        .expect("get_video failed");

    assert_eq!(video.user_id.as_str(), "bob");
    assert_eq!(video.title, "Title v7");
    assert_eq!(video.num_comments, 12);
}

#[tokio::test]
async fn test_list_comments_decodes_records() {
    let (server, provider) = common::setup_catalog_mock().await;
    common::mount_comments(
        &server,
        "v1",
        serde_json::json!([
            common::comment_json("c2", "v1", "bob", "2025-01-02T00:00:00Z"),
            common::comment_json("c1", "v1", "carol", "2025-01-01T00:00:00Z"),
        ]),
    )
    .await;

    let comments = provider
        .list_comments(&VideoId::new("v1").unwrap())
        .await
        .expect("list_comments failed");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id.as_str(), "c2");
    assert_eq!(comments[1].user_id.as_str(), "carol");
    assert_eq!(comments[1].video_id.as_str(), "v1");
}
