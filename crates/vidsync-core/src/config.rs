//! Configuration module for VidSync.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for VidSync.
///
/// Missing sections fall back to their defaults, so a file containing only
/// `api.base_url` is a complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// Remote catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub base_url: String,
}

/// Client storage locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for durable client state (the in-progress set).
    pub data_dir: PathBuf,
    /// Directory for session state; should not survive the OS session.
    pub session_dir: PathBuf,
}

/// Synchronization behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Refetch the video list after an edit the server rejected.
    pub refetch_after_failed_edit: bool,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Output format: `human` or `json`.
    pub format: String,
}

impl StorageConfig {
    /// SQLite file holding durable client state.
    pub fn durable_db_path(&self) -> PathBuf {
        expand_home(&self.data_dir).join("vidsync.db")
    }

    /// SQLite file holding the session label.
    pub fn session_db_path(&self) -> PathBuf {
        expand_home(&self.session_dir).join("session.db")
    }
}

/// Replace a leading `~` with the user's home directory.
///
/// Paths without a leading `~` component, or with no known home directory,
/// are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Home-relative fallback for a missing XDG directory.
fn home_fallback(relative: &str) -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(relative))
        .unwrap_or_else(|| std::env::temp_dir().join(relative))
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/vidsync/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| home_fallback(".config"))
            .join("vidsync")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| home_fallback(".local/share"))
            .join("vidsync");
        let session_dir = dirs::runtime_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("vidsync");
        Self {
            data_dir,
            session_dir,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "human".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"api.base_url"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid values for `logging.format`.
const VALID_LOG_FORMATS: &[&str] = &["human", "json"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- api ---
        match url::Url::parse(&self.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                if url.query().is_some() {
                    errors.push(ValidationError {
                        field: "api.base_url".into(),
                        message: "must not contain a query string".into(),
                    });
                }
            }
            Ok(url) => errors.push(ValidationError {
                field: "api.base_url".into(),
                message: format!("unsupported scheme '{}'; use http or https", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "api.base_url".into(),
                message: format!("invalid URL '{}': {e}", self.api.base_url),
            }),
        }

        // --- storage ---
        if self.storage.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "storage.data_dir".into(),
                message: "must not be empty".into(),
            });
        }
        if self.storage.session_dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "storage.session_dir".into(),
                message: "must not be empty".into(),
            });
        }
        if !self.storage.data_dir.as_os_str().is_empty()
            && self.storage.data_dir == self.storage.session_dir
        {
            errors.push(ValidationError {
                field: "storage.session_dir".into(),
                message: "must differ from storage.data_dir".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }
        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            errors.push(ValidationError {
                field: "logging.format".into(),
                message: format!(
                    "invalid format '{}'; valid options: {}",
                    self.logging.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use vidsync_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .api_base_url("https://videos.example.com/api")
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- api ---

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    // --- storage ---

    pub fn storage_data_dir(mut self, dir: PathBuf) -> Self {
        self.config.storage.data_dir = dir;
        self
    }

    pub fn storage_session_dir(mut self, dir: PathBuf) -> Self {
        self.config.storage.session_dir = dir;
        self
    }

    // --- sync ---

    pub fn sync_refetch_after_failed_edit(mut self, enabled: bool) -> Self {
        self.config.sync.refetch_after_failed_edit = enabled;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_format(mut self, format: impl Into<String>) -> Self {
        self.config.logging.format = format.into();
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
