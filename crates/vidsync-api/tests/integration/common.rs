//! Shared helpers for catalog API integration tests
//!
//! Each helper mounts mock endpoints on a wiremock server. Tests get a
//! provider pointing at that server.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidsync_api::HttpVideoProvider;

/// Starts a mock server and returns a provider pointed at it
pub async fn setup_catalog_mock() -> (MockServer, HttpVideoProvider) {
    let server = MockServer::start().await;
    let provider = HttpVideoProvider::with_base_url(server.uri());
    (server, provider)
}

/// A wire-shaped video record
pub fn video_json(id: &str, owner: &str, created_at: &str, num_comments: u32) -> Value {
    json!({
        "id": id,
        "user_id": owner,
        "title": format!("Title {id}"),
        "video_url": format!("https://cdn.example.com/{id}.mp4"),
        "description": format!("About {id}"),
        "created_at": created_at,
        "num_comments": num_comments
    })
}

/// A wire-shaped comment record
pub fn comment_json(id: &str, video_id: &str, author: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "video_id": video_id,
        "user_id": author,
        "content": format!("comment {id}"),
        "created_at": created_at
    })
}

/// Mounts `GET /videos?user_id={owner}` returning `videos`
pub async fn mount_video_list(server: &MockServer, owner: &str, videos: Value) {
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("user_id", owner))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "videos": videos })))
        .mount(server)
        .await;
}

/// Mounts `GET /videos/single?video_id={id}` returning `video`
pub async fn mount_single_video(server: &MockServer, video_id: &str, video: Value) {
    Mock::given(method("GET"))
        .and(path("/videos/single"))
        .and(query_param("video_id", video_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "video": video })))
        .mount(server)
        .await;
}

/// Mounts `GET /videos/comments?video_id={id}` returning `comments`
pub async fn mount_comments(server: &MockServer, video_id: &str, comments: Value) {
    Mock::given(method("GET"))
        .and(path("/videos/comments"))
        .and(query_param("video_id", video_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "comments": comments })))
        .mount(server)
        .await;
}
