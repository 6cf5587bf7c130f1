//! Client storage port (driven/secondary port)
//!
//! A small string key/value store, the client-side equivalent of browser
//! local/session storage. Durable and ephemeral stores implement the same
//! trait; which one backs a component is decided at wiring time.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage failures are adapter-specific and
//!   callers only log or propagate them.
//! - Values are opaque strings; callers own their encoding (JSON for the
//!   progress set, plain text for the session label).

/// Entry holding the JSON array of in-progress video ids (durable storage)
pub const KEY_IN_PROGRESS: &str = "in_progress";

/// Entry holding the signed-in user label (ephemeral storage)
pub const KEY_USERNAME: &str = "username";

/// Port trait for client-side key/value storage
#[async_trait::async_trait]
pub trait IClientStorage: Send + Sync {
    /// Reads an entry; `Ok(None)` when the key has never been written
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Writes an entry, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes an entry; removing a missing key is not an error
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
