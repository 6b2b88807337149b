//! Command implementations.
//!
//! Each command plays the host side of the container boundary: it turns
//! local files or stdin into containers and hands them to the document
//! adapters in `tempbox-core`.

mod export;
mod import;
mod inspect;

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use tempbox_core::fs::MediaType;

use crate::config::Cli;

/// Document variant selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    /// Plain UTF-8 text.
    Text,
    /// JSON payload.
    Json,
    /// Comma-separated values.
    Csv,
    /// Raw bytes.
    Data,
}

impl From<DocumentKind> for MediaType {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Text => Self::PlainText,
            DocumentKind::Json => Self::Json,
            DocumentKind::Csv => Self::Csv,
            DocumentKind::Data => Self::Data,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Export stdin (or a file) as a document.
    Export(ExportArgs),
    /// Import a file as a document and print its content.
    Import(ImportArgs),
    /// Describe the container a path loads into.
    Inspect(InspectArgs),
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Export(_) => "export",
            Self::Import(_) => "import",
            Self::Inspect(_) => "inspect",
        }
    }
}

/// Arguments of `tempbox export`.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Document variant to build from the payload.
    #[arg(long, value_enum)]
    pub kind: DocumentKind,

    /// File to write the exported container to.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Read the payload from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Reject malformed JSON before writing (json only).
    #[arg(long)]
    pub validate_json: bool,
}

/// Arguments of `tempbox import`.
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Document variant to import as; inferred from the extension when omitted.
    #[arg(long, value_enum)]
    pub kind: Option<DocumentKind>,

    /// File to import.
    pub path: PathBuf,
}

/// Arguments of `tempbox inspect`.
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// File or directory to inspect.
    pub path: PathBuf,
}

/// Runs the parsed command.
pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Export(args) => export::run(args).await,
        Command::Import(args) => import::run(args, &cli.import).await,
        Command::Inspect(args) => inspect::run(args, &cli.import).await,
    }
}
