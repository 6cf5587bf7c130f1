//! Client storage adapters
//!
//! Two implementations of [`IClientStorage`]:
//!
//! | Adapter | Lifetime | Used for |
//! |---|---|---|
//! | [`SqliteClientStorage`] | survives restarts | progress set, CLI session |
//! | [`MemoryStorage`] | process | tests, embedded sessions |
//!
//! `client_state.updated_at` holds an RFC 3339 timestamp of the last write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use sqlx::SqlitePool;

use vidsync_core::ports::IClientStorage;

// ============================================================================
// SqliteClientStorage
// ============================================================================

/// Durable key/value storage in the `client_state` table
#[derive(Debug, Clone)]
pub struct SqliteClientStorage {
    pool: SqlitePool,
}

impl SqliteClientStorage {
    /// Creates a storage adapter over an already-migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IClientStorage for SqliteClientStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM client_state WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO client_state (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, \
             updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        tracing::trace!(key, bytes = value.len(), "Stored client state entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM client_state WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// Ephemeral key/value storage
///
/// Writes can be switched to fail, which simulates a full or unavailable
/// backend. Reads always succeed.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set`/`remove` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("storage quota exceeded");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl IClientStorage for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.check_writable()?;
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.check_writable()?;
        self.lock().remove(key);
        Ok(())
    }
}
