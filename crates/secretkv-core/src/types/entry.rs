//! The persisted unit

use serde::{Deserialize, Serialize};

/// A raw entry as handed to [`Storage`](crate::storage::Storage)
///
/// Entries are replaced wholesale on every write to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    pub key: String,
    pub value: Vec<u8>,
    /// Ask the host to seal-wrap this entry at rest
    #[serde(default)]
    pub seal_wrap: bool,
}

impl StorageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            seal_wrap: false,
        }
    }

    pub fn with_seal_wrap(mut self, seal_wrap: bool) -> Self {
        self.seal_wrap = seal_wrap;
        self
    }
}
