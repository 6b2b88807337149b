//! `tempbox import`.

use anyhow::Context;
use tempbox_core::document::AnyDocument;
use tempbox_core::fs::{ContentFile, MediaType};
use tokio::io::AsyncWriteExt;

use super::ImportArgs;
use crate::TRACING_TARGET_COMMAND;
use crate::config::ImportConfig;

pub(super) async fn run(args: &ImportArgs, config: &ImportConfig) -> anyhow::Result<()> {
    let source = ContentFile::new(&args.path);
    let wrapper = source
        .load_limited(config.max_import_size)
        .await
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let media_type = args
        .kind
        .map(MediaType::from)
        .unwrap_or_else(|| wrapper.media_type());
    let document = AnyDocument::from_container_as(media_type, &wrapper)
        .with_context(|| format!("failed to import {} as {media_type}", args.path.display()))?;

    tracing::info!(
        target: TRACING_TARGET_COMMAND,
        path = %args.path.display(),
        media_type = %media_type,
        size = wrapper.len(),
        "Imported document"
    );

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&render(&document)).await?;
    stdout.flush().await?;

    Ok(())
}

/// Renders an imported document for the terminal.
///
/// Text variants are printed verbatim; binary data is summarized.
fn render(document: &AnyDocument) -> Vec<u8> {
    match document {
        AnyDocument::Text(text) => text.text().as_bytes().to_vec(),
        AnyDocument::Csv(csv) => csv.text().as_bytes().to_vec(),
        AnyDocument::Json(json) => json.as_bytes().to_vec(),
        AnyDocument::Data(data) => {
            let contents = data.contents();
            format!(
                "{} of binary data, sha256 {}\n",
                contents.pretty_size(),
                contents.sha256_hex()
            )
            .into_bytes()
        }
    }
}

#[cfg(test)]
mod tests {
    use tempbox_core::document::{DataDocument, JsonDocument, TextDocument};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_text_verbatim() {
        let document = AnyDocument::from(TextDocument::new("hello\nworld"));
        assert_eq!(render(&document), b"hello\nworld");

        let document = AnyDocument::from(JsonDocument::from_json_str("{ }"));
        assert_eq!(render(&document), b"{ }");
    }

    #[test]
    fn test_render_data_summary() {
        let document = AnyDocument::from(DataDocument::new(Vec::<u8>::new()));
        let rendered = String::from_utf8(render(&document)).unwrap();

        assert!(rendered.starts_with("0 B of binary data"));
        assert!(rendered.contains("e3b0c44298fc1c149afbf4c8996fb924"));
    }

    #[tokio::test]
    async fn test_import_rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.txt");
        tokio::fs::write(&path, vec![b'a'; 64]).await.unwrap();

        let args = ImportArgs { kind: None, path };
        let config = ImportConfig { max_import_size: 16 };
        assert!(run(&args, &config).await.is_err());
    }

    #[tokio::test]
    async fn test_import_invalid_utf8_as_text_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.txt");
        tokio::fs::write(&path, [0x80u8]).await.unwrap();

        let args = ImportArgs { kind: None, path };
        let error = run(&args, &ImportConfig::default()).await.unwrap_err();
        assert!(format!("{error:#}").contains("EncodingInvalid"));
    }
}
