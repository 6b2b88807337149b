//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── logging: LoggingConfig   # Log record format
//! ├── import: ImportConfig     # Size limit for loaded files
//! └── command: Command         # export | import | inspect
//! ```
//!
//! All options can be provided via CLI arguments or environment variables.
//!
//! # Example
//!
//! ```bash
//! # Export stdin as a CSV file
//! printf 'address,expires\n' | tempbox export --kind csv --output addresses.csv
//!
//! # Or configure through the environment
//! TEMPBOX_LOG_FORMAT=json tempbox inspect addresses.csv
//! ```

mod import;
mod logging;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use import::ImportConfig;
pub use logging::{LogFormat, LoggingConfig};

use crate::TRACING_TARGET_CONFIG;
use crate::commands::Command;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tempbox")]
#[command(about = "Export and import TempBox documents")]
#[command(version)]
pub struct Cli {
    /// Logging configuration.
    #[clap(flatten)]
    pub logging: LoggingConfig,

    /// Import limits.
    #[clap(flatten)]
    pub import: ImportConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// Loading the .env file first lets clap's `env` fallbacks pick up its values.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.import
            .validate()
            .context("invalid import configuration")?;
        Ok(())
    }

    /// Logs configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            log_format = ?self.logging.log_format,
            command = self.command.name(),
            "Build information"
        );

        self.import.log();
    }
}
