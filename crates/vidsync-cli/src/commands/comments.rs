//! Comment commands: `comments`, `comment`

use anyhow::{bail, Context, Result};
use clap::Args;

use vidsync_core::domain::{Comment, NewComment, UserId, VideoId};

use crate::context::AppContext;

/// `--as` wins; otherwise the signed-in user. Anonymous posts are refused.
fn resolve_author(explicit: Option<&str>, signed_in: Option<UserId>) -> Result<UserId> {
    match (explicit, signed_in) {
        (Some(name), _) => UserId::new(name).context("Invalid author"),
        (None, Some(user)) => Ok(user),
        (None, None) => bail!("No author: sign in with 'vidsync login <name>' or pass --as <user>"),
    }
}

fn comment_line(comment: &Comment) -> String {
    format!("{} [{}]: {}", comment.user_id, comment.created_at, comment.content)
}

#[derive(Debug, Args)]
pub struct CommentsCommand {
    /// Video id
    pub id: String,
}

impl CommentsCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let id = VideoId::new(self.id.as_str()).context("Invalid video id")?;
        let scope = ctx.viewer().await?;

        let comments = scope
            .engine()
            .list_comments(&id)
            .await
            .context("Failed to fetch comments")?;

        formatter.print_json(&serde_json::to_value(&comments)?);
        if comments.is_empty() {
            formatter.info("No comments yet");
            return Ok(());
        }
        formatter.success(&format!("{} comment(s) on {}", comments.len(), id));
        for comment in &comments {
            formatter.info(&comment_line(comment));
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct CommentCommand {
    /// Video id
    pub id: String,
    /// Comment text
    pub content: String,
    /// Author label; required when nobody is signed in
    #[arg(long = "as", value_name = "USER")]
    pub author: Option<String>,
}

impl CommentCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let id = VideoId::new(self.id.as_str()).context("Invalid video id")?;
        let author = resolve_author(self.author.as_deref(), ctx.current_user().await?)?;
        let scope = ctx.viewer().await?;
        let comment = NewComment::new(id, author, self.content.as_str()).context("Invalid comment")?;

        scope
            .engine()
            .add_comment(&comment)
            .await
            .context("Failed to post comment")?;

        formatter.success(&format!("Comment posted as {}", comment.user_id()));
        formatter.print_json(&serde_json::json!({
            "videoId": comment.video_id().as_str(),
            "userId": comment.user_id().as_str(),
            "content": comment.content(),
        }));
        Ok(())
    }
}
