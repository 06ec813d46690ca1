//! File-based configuration provider (YAML)

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::settings::BackendConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// Configuration provider reading a YAML file
///
/// A missing file yields the default configuration.
///
/// # Example
///
/// ```no_run
/// use secretkv_core::config::FileConfigProvider;
///
/// // ~/.config/secretkv/config.yaml
/// let user_config = FileConfigProvider::user();
///
/// let mount_config = FileConfigProvider::new("/etc/secretkv/mount.yaml");
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-level config (~/.config/secretkv/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("secretkv").join("config.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write `config` to the file, creating parent directories
    pub fn save(&self, config: &BackendConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn load(&self) -> ConfigResult<BackendConfig> {
        if !self.path.exists() {
            return Ok(BackendConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.load().await.unwrap(), BackendConfig::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("nested").join("config.yaml"));

        let config = BackendConfig::new().with_seal_wrap(true).with_help("team secrets");
        provider.save(&config).unwrap();

        assert!(provider.exists());
        let content = fs::read_to_string(provider.path()).unwrap();
        assert!(content.contains("seal_wrap: true"));
        assert_eq!(provider.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "seal_wrap: [not, a, bool]").unwrap();

        let provider = FileConfigProvider::new(&path);
        assert!(matches!(provider.load().await, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_user_path() {
        let provider = FileConfigProvider::user();
        assert!(provider.path().ends_with("secretkv/config.yaml"));
    }
}
