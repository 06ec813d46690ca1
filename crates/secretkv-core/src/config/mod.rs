//! Backend configuration
//!
//! Configuration arrives through a separate path from secrets:
//! - `ConfigProvider`: where configuration is loaded from
//! - `MemoryConfigProvider`: in-memory for testing
//! - `FileConfigProvider`: YAML file-based
//! - `ConfigCell`: the cached, invalidatable copy the backend reads

mod traits;
mod settings;
mod memory;
mod file;
mod cell;

pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use settings::{BackendConfig, DEFAULT_HELP};
pub use memory::MemoryConfigProvider;
pub use file::FileConfigProvider;
pub use cell::ConfigCell;
