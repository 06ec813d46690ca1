//! Logger forwarding to `tracing`

use super::traits::Logger;

/// Logger that emits `tracing` events under the `secretkv` target
///
/// The host installs whatever subscriber it wants; with none installed the
/// events are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "secretkv", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "secretkv", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "secretkv", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "secretkv", "{}", message);
    }
}
