//! Host-driven invalidation of cached configuration

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ConfigCell;

/// The only invalidation key that has an effect
pub const CONFIG_KEY: &str = "config";

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationState {
    /// Serving requests from whatever is cached
    Active,
    /// Clearing the cache under the exclusive lock
    Resetting,
}

/// Clears the backend's cached configuration when the host says it changed
#[derive(Debug)]
pub struct InvalidationController {
    cell: Arc<ConfigCell>,
    /// Resets currently in progress
    in_flight: AtomicUsize,
    resets: AtomicU64,
}

/// Marks one reset in progress until dropped
struct ResetGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> ResetGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl InvalidationController {
    pub fn new(cell: Arc<ConfigCell>) -> Self {
        Self {
            cell,
            in_flight: AtomicUsize::new(0),
            resets: AtomicU64::new(0),
        }
    }

    /// `Resetting` while any reset is still clearing the cell
    pub fn state(&self) -> InvalidationState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            InvalidationState::Resetting
        } else {
            InvalidationState::Active
        }
    }

    /// Number of resets performed
    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::SeqCst)
    }

    /// Handle an invalidation signal from the host
    ///
    /// Returns true if the signal reset the cache. Keys other than
    /// [`CONFIG_KEY`] are ignored.
    pub fn invalidate(&self, key: &str) -> bool {
        if key != CONFIG_KEY {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&self) {
        let _guard = ResetGuard::enter(&self.in_flight);
        self.cell.clear();
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}
