//! CLI commands

pub mod comments;
pub mod session;
pub mod videos;

use vidsync_core::domain::Video;

/// One list row: `▶ [owner] Title (id) · 3 comments`
pub(crate) fn video_line(video: &Video, in_progress: bool, owned: bool) -> String {
    let marker = if in_progress { "\u{25b6} " } else { "  " };
    let owner = if owned { "[owner] " } else { "" };
    let noun = if video.num_comments == 1 { "comment" } else { "comments" };
    format!(
        "{marker}{owner}{} ({}) \u{b7} {} {noun}",
        video.title, video.id, video.num_comments
    )
}

/// Video serialized for `--json`, with the client-side flags attached
pub(crate) fn video_json(video: &Video, in_progress: bool, owned: bool) -> serde_json::Value {
    let mut value = serde_json::to_value(video).unwrap_or(serde_json::Value::Null);
    if let Some(map) = value.as_object_mut() {
        map.insert("inProgress".into(), in_progress.into());
        map.insert("owned".into(), owned.into());
    }
    value
}
