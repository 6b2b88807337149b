//! Logging configuration.

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format of log records written to stderr.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Logging options.
///
/// Filtering is controlled by the `RUST_LOG` environment variable; this
/// only selects how records are rendered.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log record format.
    #[arg(long, env = "TEMPBOX_LOG_FORMAT", value_enum, default_value = "text")]
    #[serde(default)]
    pub log_format: LogFormat,
}
