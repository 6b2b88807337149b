//! Raw binary documents.

use bytes::Bytes;

use super::FileDocument;
use crate::error::Result;
use crate::fs::MediaType;
use crate::io::ContentBytes;

/// Arbitrary bytes exported without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataDocument {
    contents: ContentBytes,
}

impl DataDocument {
    /// Creates a binary document.
    pub fn new(contents: impl Into<ContentBytes>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Returns the bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Returns the underlying payload.
    #[must_use]
    pub fn contents(&self) -> &ContentBytes {
        &self.contents
    }

    /// Consumes the document and returns the bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.contents.into_bytes()
    }
}

impl FileDocument for DataDocument {
    const MEDIA_TYPE: MediaType = MediaType::Data;

    fn from_contents(contents: &ContentBytes) -> Result<Self> {
        Ok(Self {
            contents: contents.clone(),
        })
    }

    fn to_contents(&self) -> ContentBytes {
        self.contents.clone()
    }
}
