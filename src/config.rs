//! Configuration for notekv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Main configuration for a notekv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the file-backed store
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {storage_key}.json   (the serialized record list)
    pub data_dir: PathBuf,

    /// Namespaced key the record blob is stored under
    pub storage_key: String,

    // -------------------------------------------------------------------------
    // View Configuration
    // -------------------------------------------------------------------------
    /// How long a notification stays visible before it is swept
    pub notification_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./notekv_data"),
            storage_key: "notekv.records".to_string(),
            notification_ttl: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for the file-backed store)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the namespaced storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Set the notification time-to-live
    pub fn notification_ttl(mut self, ttl: Duration) -> Self {
        self.config.notification_ttl = ttl;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
