//! In-memory configuration provider

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::settings::BackendConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// In-memory configuration provider for testing
///
/// Counts how often it has been loaded, which shows when the backend's cached
/// copy was actually refreshed.
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<BackendConfig>,
    loads: AtomicUsize,
}

impl MemoryConfigProvider {
    /// Create a provider serving the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider serving `config`
    pub fn with_config(config: BackendConfig) -> Self {
        Self {
            config: RwLock::new(config),
            loads: AtomicUsize::new(0),
        }
    }

    /// Replace the configuration served from now on
    pub fn set(&self, config: BackendConfig) {
        *self.config.write() = config;
    }

    /// Number of times `load` has been called
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigProvider for MemoryConfigProvider {
    async fn load(&self) -> ConfigResult<BackendConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.config.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_config_provider() {
        let provider = MemoryConfigProvider::new();
        assert_eq!(provider.load().await.unwrap(), BackendConfig::default());

        provider.set(BackendConfig::new().with_seal_wrap(true));
        assert!(provider.load().await.unwrap().seal_wrap);
        assert_eq!(provider.loads(), 2);
    }
}
