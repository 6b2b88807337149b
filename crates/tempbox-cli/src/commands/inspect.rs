//! `tempbox inspect`.

use std::fmt;

use anyhow::Context;
use tempbox_core::fs::ContentFile;
use tempbox_core::io::{FileContainer, FileWrapper};
use tokio::io::AsyncWriteExt;

use super::InspectArgs;
use crate::config::ImportConfig;

pub(super) async fn run(args: &InspectArgs, config: &ImportConfig) -> anyhow::Result<()> {
    let wrapper = ContentFile::new(&args.path)
        .load_limited(config.max_import_size)
        .await
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let mut description = String::new();
    describe(&wrapper, &mut description).context("failed to describe container")?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(description.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}

/// Describes a container, one `key: value` pair per line.
fn describe(wrapper: &FileWrapper, out: &mut impl fmt::Write) -> fmt::Result {
    if let Some(filename) = wrapper.preferred_filename() {
        writeln!(out, "name: {filename}")?;
    }

    if let Some(entries) = wrapper.directory_entries() {
        writeln!(out, "kind: directory")?;
        writeln!(out, "entries: {}", entries.len())?;
        for entry in entries {
            writeln!(out, "  {entry}")?;
        }
        return Ok(());
    }

    writeln!(out, "kind: regular file")?;
    writeln!(out, "media type: {}", wrapper.media_type())?;
    if let Some(contents) = wrapper.regular_file_contents() {
        writeln!(out, "size: {} ({} bytes)", contents.pretty_size(), contents.len())?;
        writeln!(out, "utf-8: {}", contents.to_str().is_ok())?;
        writeln!(out, "sha256: {}", contents.sha256_hex())?;
    }

    Ok(())
}
