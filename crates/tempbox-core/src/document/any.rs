//! Dispatch over the document variants by media type.

use super::{CsvDocument, DataDocument, FileDocument, JsonDocument, TextDocument};
use crate::error::Result;
use crate::fs::MediaType;
use crate::io::{ContentBytes, FileContainer, FileWrapper};

/// Any of the four document variants.
///
/// Hosts that learn the media type at runtime (from a picker filter or a
/// file extension) use this to pick the matching adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyDocument {
    /// Plain text.
    Text(TextDocument),
    /// JSON payload.
    Json(JsonDocument),
    /// Comma-separated values.
    Csv(CsvDocument),
    /// Raw bytes.
    Data(DataDocument),
}

impl AnyDocument {
    /// Imports a container with the adapter registered for `media_type`.
    ///
    /// # Errors
    ///
    /// Same as [`FileDocument::from_container`] for the selected variant.
    pub fn from_container_as<C: FileContainer + ?Sized>(
        media_type: MediaType,
        container: &C,
    ) -> Result<Self> {
        Ok(match media_type {
            MediaType::PlainText => Self::Text(TextDocument::from_container(container)?),
            MediaType::Json => Self::Json(JsonDocument::from_container(container)?),
            MediaType::Csv => Self::Csv(CsvDocument::from_container(container)?),
            MediaType::Data => Self::Data(DataDocument::from_container(container)?),
        })
    }

    /// Imports a wrapper using the media type it is tagged with.
    ///
    /// # Errors
    ///
    /// Same as [`from_container_as`](Self::from_container_as).
    pub fn from_wrapper(wrapper: &FileWrapper) -> Result<Self> {
        Self::from_container_as(wrapper.media_type(), wrapper)
    }

    /// Returns the media type of the wrapped variant.
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        match self {
            Self::Text(_) => TextDocument::MEDIA_TYPE,
            Self::Json(_) => JsonDocument::MEDIA_TYPE,
            Self::Csv(_) => CsvDocument::MEDIA_TYPE,
            Self::Data(_) => DataDocument::MEDIA_TYPE,
        }
    }

    /// Returns the byte representation written on export.
    #[must_use]
    pub fn to_contents(&self) -> ContentBytes {
        match self {
            Self::Text(document) => document.to_contents(),
            Self::Json(document) => document.to_contents(),
            Self::Csv(document) => document.to_contents(),
            Self::Data(document) => document.to_contents(),
        }
    }

    /// Exports the wrapped variant.
    #[must_use]
    pub fn to_container(&self) -> FileWrapper {
        match self {
            Self::Text(document) => document.to_container(),
            Self::Json(document) => document.to_container(),
            Self::Csv(document) => document.to_container(),
            Self::Data(document) => document.to_container(),
        }
    }
}

impl From<TextDocument> for AnyDocument {
    fn from(document: TextDocument) -> Self {
        Self::Text(document)
    }
}

impl From<JsonDocument> for AnyDocument {
    fn from(document: JsonDocument) -> Self {
        Self::Json(document)
    }
}

impl From<CsvDocument> for AnyDocument {
    fn from(document: CsvDocument) -> Self {
        Self::Csv(document)
    }
}

impl From<DataDocument> for AnyDocument {
    fn from(document: DataDocument) -> Self {
        Self::Data(document)
    }
}
