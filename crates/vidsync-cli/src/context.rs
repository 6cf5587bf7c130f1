//! Per-invocation wiring
//!
//! Each command gets an [`AppContext`]: the validated config plus the chosen
//! output format. Storage and the HTTP provider are opened on demand.

use std::sync::Arc;

use anyhow::{Context, Result};

use vidsync_api::HttpVideoProvider;
use vidsync_cache::{DatabasePool, IdentityStore, ProgressTracker, SqliteClientStorage};
use vidsync_core::config::Config;
use vidsync_core::domain::UserId;
use vidsync_core::ports::IVideoApi;
use vidsync_sync::SessionScope;

use crate::output::{get_formatter, OutputFormat, OutputFormatter};

pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        Self { config, format }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        get_formatter(self.format)
    }

    /// Session identity, backed by the runtime-dir database
    pub async fn identity(&self) -> Result<IdentityStore> {
        let path = self.config.storage.session_db_path();
        let pool = DatabasePool::new(&path)
            .await
            .with_context(|| format!("Failed to open session database {}", path.display()))?;
        Ok(IdentityStore::new(Arc::new(SqliteClientStorage::new(
            pool.pool().clone(),
        ))))
    }

    /// Progress set, backed by the data-dir database
    pub async fn progress(&self) -> Result<Arc<ProgressTracker>> {
        let path = self.config.storage.durable_db_path();
        let pool = DatabasePool::new(&path)
            .await
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        let storage = Arc::new(SqliteClientStorage::new(pool.pool().clone()));
        Ok(Arc::new(ProgressTracker::load(storage).await))
    }

    pub fn api(&self) -> Arc<dyn IVideoApi> {
        Arc::new(HttpVideoProvider::with_base_url(self.config.api.base_url.clone()))
    }

    /// Scope for the signed-in user; fails when nobody is signed in
    pub async fn signed_in(&self) -> Result<SessionScope> {
        let identity = self.identity().await?;
        let scope = SessionScope::resume(&identity, self.api(), self.progress().await?, &self.config.sync)
            .await
            .context("Failed to read session identity")?;
        scope.context("Not signed in. Run 'vidsync login <name>' first.")
    }

    /// The signed-in user, if any
    pub async fn current_user(&self) -> Result<Option<UserId>> {
        self.identity()
            .await?
            .current()
            .await
            .context("Failed to read session identity")
    }

    /// Scope for whoever is viewing, falling back to the anonymous label
    pub async fn viewer(&self) -> Result<SessionScope> {
        let identity = self.identity().await?;
        let user = identity.current_or_anonymous().await;
        Ok(SessionScope::new(
            user,
            self.api(),
            self.progress().await?,
            &self.config.sync,
        ))
    }
}
