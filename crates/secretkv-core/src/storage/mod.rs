//! Persistence abstractions and implementations
//!
//! This module provides the storage seam the backend persists through:
//! - `Storage` trait, normally supplied by the host
//! - Built-in implementations: `MemoryStorage`, `FileStorage`

mod traits;
mod memory;
mod file;

pub use traits::{Storage, StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use file::FileStorage;
