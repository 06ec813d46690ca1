//! JSON codec for secret payloads

use crate::error::{BackendError, BackendResult};
use crate::types::SecretRecord;

/// Serialize a secret payload for storage
pub fn encode(record: &SecretRecord) -> BackendResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(BackendError::Encode)
}

/// Deserialize bytes read back from storage
///
/// Anything other than a JSON object is treated as corruption.
pub fn decode(bytes: &[u8]) -> BackendResult<SecretRecord> {
    serde_json::from_slice(bytes).map_err(BackendError::Decode)
}
