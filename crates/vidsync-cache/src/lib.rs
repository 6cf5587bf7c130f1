//! VidSync Cache - Client-side state
//!
//! Holds everything the client keeps between (and during) server round-trips:
//! - Key/value client storage, durable (SQLite) or ephemeral (memory)
//! - The cached video list for the signed-in user
//! - The "resume watching" progress set
//! - The session identity label
//!
//! ## Architecture
//!
//! The storage adapters implement the `IClientStorage` port from
//! `vidsync-core`. The stateful components on top of them only see the port,
//! so tests run them against [`MemoryStorage`].
//!
//! ## Key Components
//!
//! - [`DatabasePool`] - Connection pool with migration support
//! - [`SqliteClientStorage`] / [`MemoryStorage`] - `IClientStorage` adapters
//! - [`CacheStore`] - Observable in-memory video list
//! - [`ProgressTracker`] - Persisted set of in-progress video ids
//! - [`IdentityStore`] - Session identity label
//! - [`CacheError`] - Error types for cache operations
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use vidsync_cache::{DatabasePool, ProgressTracker, SqliteClientStorage};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = DatabasePool::new(Path::new("/home/user/.local/share/vidsync/vidsync.db")).await?;
//! let storage = Arc::new(SqliteClientStorage::new(pool.pool().clone()));
//! let progress = ProgressTracker::load(storage).await;
//! # Ok(())
//! # }
//! ```

pub mod identity;
pub mod pool;
pub mod progress;
pub mod storage;
pub mod store;

pub use identity::IdentityStore;
pub use pool::DatabasePool;
pub use progress::ProgressTracker;
pub use storage::{MemoryStorage, SqliteClientStorage};
pub use store::CacheStore;

use vidsync_core::domain::DomainError;

/// Errors that can occur during cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A storage backend rejected a read or write
    #[error("Storage error: {0}")]
    StorageFailed(String),

    /// Input was rejected before reaching storage
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

impl From<sqlx::Error> for CacheError {
    fn from(e: sqlx::Error) -> Self {
        CacheError::QueryFailed(e.to_string())
    }
}
