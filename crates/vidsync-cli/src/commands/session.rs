//! Session commands: `login`, `logout`, `whoami`
//!
//! The identity is a bare label stored for the length of the OS session.
//! Nothing is checked against the server.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use vidsync_sync::SessionScope;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Name to act as
    pub name: String,
}

impl LoginCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let identity = ctx.identity().await?;
        let scope = SessionScope::login(
            &identity,
            &self.name,
            ctx.api(),
            ctx.progress().await?,
            &ctx.config.sync,
        )
        .await
        .context("Login failed")?;

        info!(user = %scope.user(), "Signed in");
        formatter.success(&format!("Signed in as {}", scope.user()));
        formatter.print_json(&serde_json::json!({ "user": scope.user().as_str() }));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct LogoutCommand;

impl LogoutCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let identity = ctx.identity().await?;
        let scope = SessionScope::resume(&identity, ctx.api(), ctx.progress().await?, &ctx.config.sync)
            .await
            .context("Failed to read session identity")?;

        match scope {
            Some(scope) => {
                let user = scope.user().clone();
                scope.logout(&identity).await.context("Logout failed")?;
                formatter.success(&format!("Signed out {}", user));
                formatter.print_json(&serde_json::json!({ "signedOut": user.as_str() }));
            }
            None => {
                formatter.warn("Not signed in");
                formatter.print_json(&serde_json::json!({ "signedOut": null }));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct WhoamiCommand;

impl WhoamiCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let formatter = ctx.formatter();
        let current = ctx.current_user().await?;

        match &current {
            Some(user) => formatter.success(&format!("Signed in as {}", user)),
            None => formatter.info("Not signed in"),
        }
        formatter.print_json(&serde_json::json!({
            "user": current.as_ref().map(|u| u.as_str())
        }));
        Ok(())
    }
}
