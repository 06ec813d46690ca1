//! Cached configuration handle

use std::sync::Arc;

use parking_lot::RwLock;

use super::settings::BackendConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// Owned, swappable cache of the backend's configuration
///
/// Readers hold the shared lock only long enough to clone the `Arc`, never
/// across an await. [`ConfigCell::clear`] takes the exclusive lock, so it waits
/// for in-flight lookups and is atomic with respect to them.
///
/// Every clear bumps a generation counter. A load that started before a clear
/// publishes against the generation it observed and is discarded if that
/// generation is gone, so stale configuration never outlives an invalidation.
#[derive(Debug, Default)]
pub struct ConfigCell {
    state: RwLock<CellState>,
}

#[derive(Debug, Default)]
struct CellState {
    current: Option<Arc<BackendConfig>>,
    generation: u64,
}

impl ConfigCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell already holding `config`
    pub fn with_config(config: BackendConfig) -> Self {
        Self {
            state: RwLock::new(CellState {
                current: Some(Arc::new(config)),
                generation: 0,
            }),
        }
    }

    /// Cached configuration, if any
    pub fn get(&self) -> Option<Arc<BackendConfig>> {
        self.state.read().current.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().current.is_none()
    }

    /// Number of clears so far
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Cached configuration, or the generation a fresh load must publish against
    fn lookup(&self) -> Result<Arc<BackendConfig>, u64> {
        let state = self.state.read();
        match &state.current {
            Some(config) => Ok(Arc::clone(config)),
            None => Err(state.generation),
        }
    }

    /// Publish a loaded configuration if no clear happened since `generation`
    ///
    /// Returns whether the cell now holds `config`. A cell another loader
    /// already filled keeps its value.
    pub fn publish(&self, generation: u64, config: Arc<BackendConfig>) -> bool {
        let mut state = self.state.write();
        if state.generation != generation || state.current.is_some() {
            return false;
        }
        state.current = Some(config);
        true
    }

    /// Drop the cached configuration
    ///
    /// Returns whether anything was cached.
    pub fn clear(&self) -> bool {
        let mut state = self.state.write();
        state.generation = state.generation.wrapping_add(1);
        state.current.take().is_some()
    }

    /// Cached configuration, loading it from `provider` on a miss
    pub async fn get_or_load(&self, provider: &dyn ConfigProvider) -> ConfigResult<Arc<BackendConfig>> {
        let generation = match self.lookup() {
            Ok(config) => return Ok(config),
            Err(generation) => generation,
        };

        let loaded = Arc::new(provider.load().await?);
        self.publish(generation, Arc::clone(&loaded));
        Ok(loaded)
    }
}
