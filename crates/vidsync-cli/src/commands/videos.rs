//! Video commands: `list`, `show`, `play`, `create`, `edit`

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;

use vidsync_core::domain::{NewVideo, VideoId, VideoPatch};
use vidsync_sync::{OperationKind, SyncEngine};

use super::{video_json, video_line};
use crate::context::AppContext;

/// The message recorded for a failed engine operation
fn failure(engine: &SyncEngine, kind: OperationKind) -> anyhow::Error {
    match engine.last_error(kind) {
        Some(failure) => anyhow!(failure.message),
        None => anyhow!(kind.failure_message()),
    }
}

fn parse_id(raw: &str) -> Result<VideoId> {
    VideoId::new(raw).context("Invalid video id")
}

#[derive(Debug, Args)]
pub struct ListCommand;

impl ListCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let scope = ctx.signed_in().await?;

        if !scope.refresh().await {
            return Err(failure(scope.engine(), OperationKind::ListVideos));
        }

        let in_progress = scope.progress().all();
        let videos = scope.display_list();

        formatter.print_json(&serde_json::Value::Array(
            videos
                .iter()
                .map(|v| video_json(v, in_progress.contains(&v.id), scope.is_owner(v)))
                .collect(),
        ));

        if videos.is_empty() {
            formatter.info("No videos yet. Add one with 'vidsync create'.");
            return Ok(());
        }
        formatter.success(&format!("{} video(s) for {}", videos.len(), scope.user()));
        for video in &videos {
            formatter.info(&video_line(
                video,
                in_progress.contains(&video.id),
                scope.is_owner(video),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Video id
    pub id: String,
}

impl ShowCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let id = parse_id(&self.id)?;
        let scope = ctx.viewer().await?;

        let Some(video) = scope.engine().get_video(&id).await else {
            return Err(failure(scope.engine(), OperationKind::GetVideo));
        };
        let owned = scope.is_owner(&video);
        let in_progress = scope.progress().is_in_progress(&video.id);

        formatter.print_json(&video_json(&video, in_progress, owned));

        let heading = if owned {
            format!("[owner] {}", video.title)
        } else {
            video.title.clone()
        };
        formatter.success(&heading);
        formatter.info(&format!("Id:          {}", video.id));
        formatter.info(&format!("Owner:       {}", video.user_id));
        formatter.info(&format!("URL:         {}", video.video_url));
        formatter.info(&format!("Created:     {}", video.created_at));
        formatter.info(&format!("Comments:    {}", video.num_comments));
        if !video.description.is_empty() {
            formatter.info(&format!("Description: {}", video.description));
        }
        if in_progress {
            formatter.info("In progress");
        }
        if owned {
            formatter.info(&format!("Edit with 'vidsync edit {}'", video.id));
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct PlayCommand {
    /// Video id
    pub id: String,
}

impl PlayCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let id = parse_id(&self.id)?;
        let scope = ctx.viewer().await?;

        let Some(video) = scope.engine().get_video(&id).await else {
            return Err(failure(scope.engine(), OperationKind::GetVideo));
        };
        let first_play = scope.start_playback(&video.id).await;

        formatter.success(&format!("Playing {}", video.title));
        formatter.info(&video.video_url);
        if first_play {
            formatter.info("Marked as in progress");
        }
        formatter.print_json(&serde_json::json!({
            "video": video_json(&video, true, scope.is_owner(&video)),
            "firstPlay": first_play,
        }));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Video title
    #[arg(long)]
    pub title: String,
    /// Source URL of the media
    #[arg(long)]
    pub url: String,
    /// Video description
    #[arg(long)]
    pub description: String,
}

impl CreateCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let scope = ctx.signed_in().await?;
        let new_video = NewVideo::new(
            self.title.as_str(),
            self.url.as_str(),
            self.description.as_str(),
            scope.user().clone(),
        )
        .context("Invalid video")?;

        if !scope.engine().create_video(&new_video).await {
            return Err(failure(scope.engine(), OperationKind::CreateVideo));
        }

        let count = scope.engine().cache().len();
        formatter.success(&format!("Added \"{}\"", self.title));
        formatter.info(&format!("{} video(s) for {}", count, scope.user()));
        formatter.print_json(&serde_json::json!({ "created": true, "videos": count }));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct EditCommand {
    /// Video id
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New source URL
    #[arg(long)]
    pub url: Option<String>,
}

impl EditCommand {
    fn patch(&self) -> VideoPatch {
        let mut patch = VideoPatch::new();
        if let Some(title) = &self.title {
            patch = patch.title(title.as_str());
        }
        if let Some(description) = &self.description {
            patch = patch.description(description.as_str());
        }
        if let Some(url) = &self.url {
            patch = patch.video_url(url.as_str());
        }
        patch
    }

    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let id = parse_id(&self.id)?;
        let patch = self.patch();
        if patch.is_empty() {
            bail!("Nothing to change: pass --title, --description or --url");
        }

        let scope = ctx.signed_in().await?;
        let Some(video) = scope.engine().get_video(&id).await else {
            return Err(failure(scope.engine(), OperationKind::GetVideo));
        };
        if !scope.is_owner(&video) {
            bail!("Only {} can edit this video", video.user_id);
        }

        if !scope.engine().edit_video(&id, &patch).await {
            return Err(failure(scope.engine(), OperationKind::EditVideo));
        }

        formatter.success(&format!("Updated {}", id));
        if let Some(updated) = scope.engine().cache().get(&id) {
            formatter.print_json(&video_json(&updated, scope.progress().is_in_progress(&id), true));
        }
        Ok(())
    }
}
