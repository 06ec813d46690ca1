//! Backend configuration values

use serde::{Deserialize, Serialize};

/// Help text reported when no custom help is configured
pub const DEFAULT_HELP: &str = "\
The secretkv backend stores arbitrary JSON secrets per caller.
Each secret is addressed by the caller's token plus the path it was written
to, so callers can only ever see their own secrets. Write with create/update
and read back with read; reading a path that was never written reports
\"No value found\".";

/// Configuration of a mounted backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Ask the host to seal-wrap written entries at rest
    #[serde(default)]
    pub seal_wrap: bool,

    /// Custom help text for this mount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seal_wrap(mut self, seal_wrap: bool) -> Self {
        self.seal_wrap = seal_wrap;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Configured help text, or the built-in one
    pub fn help_text(&self) -> &str {
        self.help.as_deref().unwrap_or(DEFAULT_HELP)
    }
}
