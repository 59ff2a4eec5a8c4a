//! Configuration management for the BaristaLog server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BARISTA_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Snapshot storage configuration
    pub storage: StorageConfig,

    /// Journal behaviour
    pub journal: JournalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the snapshot file
    pub data_dir: PathBuf,

    /// Name of the snapshot, without extension
    pub snapshot_key: String,
}

impl StorageConfig {
    /// Full path of the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.snapshot_key))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalConfig {
    /// Language used when a request does not ask for one
    pub default_language: Language,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("BARISTA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("storage.data_dir", "data")?
            .set_default("storage.snapshot_key", "barista-beans")?
            .set_default("journal.default_language", "spanish")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BARISTA_ prefix)
            .add_source(
                Environment::with_prefix("BARISTA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            snapshot_key: "barista-beans".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path() {
        let storage = StorageConfig {
            data_dir: PathBuf::from("/var/lib/barista"),
            snapshot_key: "beans".to_string(),
        };
        assert_eq!(storage.snapshot_path(), PathBuf::from("/var/lib/barista/beans.json"));
        assert_eq!(
            StorageConfig::default().snapshot_path(),
            PathBuf::from("data/barista-beans.json")
        );
    }
}
