//! Import limits.

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Default upper bound on the size of an imported file (16 MiB).
const DEFAULT_MAX_IMPORT_SIZE: usize = 16 * 1024 * 1024;

/// Limits applied when loading files into containers.
///
/// # Environment Variables
///
/// - `TEMPBOX_MAX_IMPORT_SIZE` - Largest file accepted by `import` and
///   `inspect`, in bytes (default: 16777216)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ImportConfig {
    /// Largest file, in bytes, that will be read into memory.
    #[arg(long, env = "TEMPBOX_MAX_IMPORT_SIZE", default_value_t = DEFAULT_MAX_IMPORT_SIZE)]
    #[serde(default = "default_max_import_size")]
    pub max_import_size: usize,
}

impl ImportConfig {
    /// Validates the configuration values.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.max_import_size == 0 {
            return Err(anyhow!("max import size must be greater than zero"));
        }
        Ok(())
    }

    /// Logs the configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            max_import_size = self.max_import_size,
            "Import configuration"
        );
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_import_size: DEFAULT_MAX_IMPORT_SIZE,
        }
    }
}

fn default_max_import_size() -> usize {
    DEFAULT_MAX_IMPORT_SIZE
}
