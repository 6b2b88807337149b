//! Plain text documents.

use std::fmt;

use super::FileDocument;
use crate::error::Result;
use crate::fs::MediaType;
use crate::io::ContentBytes;

/// Plain UTF-8 text exported as `text/plain`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    /// Creates a text document.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the document and returns the text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl FileDocument for TextDocument {
    const MEDIA_TYPE: MediaType = MediaType::PlainText;

    fn from_contents(contents: &ContentBytes) -> Result<Self> {
        Ok(Self::new(contents.to_str()?))
    }

    fn to_contents(&self) -> ContentBytes {
        ContentBytes::from(self.text.as_str())
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FileContainer, FileWrapper};

    #[test]
    fn test_export_hello_world() {
        let container = TextDocument::new("hello\nworld").to_container();

        assert_eq!(container.media_type(), MediaType::PlainText);
        assert_eq!(container.len(), 11);
        assert_eq!(
            container.regular_file_contents().unwrap().as_bytes(),
            b"hello\nworld"
        );

        let restored = TextDocument::from_container(&container).unwrap();
        assert_eq!(restored.text(), "hello\nworld");
    }

    #[test]
    fn test_round_trip_preserves_unicode() {
        let samples = [
            "",
            "plain ascii",
            "Grüße aus Köln",
            "日本語のメール",
            "emoji 📬 and combining e\u{301}",
            "crlf\r\nline",
            "nul\0byte",
        ];

        for sample in samples {
            let container = TextDocument::new(sample).to_container();
            let restored = TextDocument::from_container(&container).unwrap();
            assert_eq!(restored.text(), sample);
            assert_eq!(container.len(), sample.len());
        }
    }

    #[test]
    fn test_import_does_not_substitute_replacement_characters() {
        let container = FileWrapper::regular_file(vec![b'h', b'i', 0xC3]);
        assert!(TextDocument::from_container(&container).is_err());
    }
}
