//! Configuration provider trait

use async_trait::async_trait;

use super::settings::BackendConfig;

/// Source of backend configuration
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: Reads from YAML file (~/.config/secretkv/config.yaml)
/// - Host adapter: reads the mount's stored `config` entry
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Load the current configuration
    async fn load(&self) -> ConfigResult<BackendConfig>;
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
