//! `tempbox export`.

use std::path::Path;

use anyhow::Context;
use tempbox_core::document::{AnyDocument, JsonDocument};
use tempbox_core::fs::{ContentFile, MediaType};
use tempbox_core::io::{ContentBytes, FileWrapper};
use tokio::io::AsyncReadExt;

use super::{DocumentKind, ExportArgs};
use crate::TRACING_TARGET_COMMAND;

pub(super) async fn run(args: &ExportArgs) -> anyhow::Result<()> {
    let payload = read_payload(args.input.as_deref()).await?;
    let document = build_document(args.kind, payload, args.validate_json)
        .context("failed to build document from payload")?;

    let container = document.to_container();
    ContentFile::new(&args.output)
        .save(&container)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        path = %args.output.display(),
        media_type = %container.media_type(),
        size = container.len(),
        "Exported document"
    );

    Ok(())
}

async fn read_payload(input: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the selected variant from raw payload bytes.
///
/// Text variants go through the import path so the payload gets the same
/// UTF-8 check a picked file would.
fn build_document(
    kind: DocumentKind,
    payload: Vec<u8>,
    validate_json: bool,
) -> tempbox_core::Result<AnyDocument> {
    let contents = ContentBytes::from(payload);

    match kind {
        DocumentKind::Json => {
            let document = JsonDocument::from_bytes(contents);
            if validate_json {
                document.validate()?;
            }
            Ok(document.into())
        }
        kind => AnyDocument::from_container_as(
            MediaType::from(kind),
            &FileWrapper::regular_file(contents),
        ),
    }
}
