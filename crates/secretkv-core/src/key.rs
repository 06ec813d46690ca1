//! Storage key derivation
//!
//! Every secret lives under its caller's identity: `identity + "/" + path`.
//! Identities may not contain the separator, so the first `/` of a key always
//! marks the end of the identity and no two (identity, path) pairs share a key.

use crate::error::{BackendError, BackendResult};

/// Separator between identity and logical path
pub const KEY_SEPARATOR: char = '/';

/// Fully qualified storage key for one caller's secret
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the storage key for `path` in `identity`'s namespace
pub fn build_key(identity: &str, path: &str) -> BackendResult<StorageKey> {
    if identity.is_empty() {
        return Err(BackendError::invalid_argument("identity cannot be empty"));
    }
    if identity.contains(KEY_SEPARATOR) {
        return Err(BackendError::invalid_argument(format!(
            "identity cannot contain '{}'",
            KEY_SEPARATOR
        )));
    }
    if path.is_empty() {
        return Err(BackendError::invalid_argument("path cannot be empty"));
    }

    let mut key = String::with_capacity(identity.len() + 1 + path.len());
    key.push_str(identity);
    key.push(KEY_SEPARATOR);
    key.push_str(path);
    Ok(StorageKey(key))
}
