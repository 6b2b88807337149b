//! Document adapters between application content and file containers
//!
//! Each content variant implements [`FileDocument`], a symmetric pair of
//! import and export operations plus a static media type:
//!
//! | Variant | Representation | Media type |
//! |---|---|---|
//! | [`TextDocument`] | `String` | `text/plain` |
//! | [`JsonDocument`] | JSON bytes | `application/json` |
//! | [`CsvDocument`] | `String` of comma-separated rows | `text/csv` |
//! | [`DataDocument`] | raw bytes | `application/octet-stream` |
//!
//! Adapters are stateless: every operation is a pure function of its input,
//! so documents can be imported and exported concurrently without locking.
//!
//! # Example
//!
//! ```
//! use tempbox_core::document::{FileDocument, TextDocument};
//! use tempbox_core::fs::MediaType;
//!
//! let container = TextDocument::new("hello\nworld").to_container();
//! assert_eq!(container.media_type(), MediaType::PlainText);
//! assert_eq!(container.len(), 11);
//!
//! let restored = TextDocument::from_container(&container).unwrap();
//! assert_eq!(restored.text(), "hello\nworld");
//! ```

mod any;
mod csv;
mod data;
mod encode;
mod json;
mod text;

pub use any::AnyDocument;
pub use csv::CsvDocument;
pub use data::DataDocument;
pub use encode::{EncodeJson, JsonStyle};
pub use json::JsonDocument;
pub use text::TextDocument;

use crate::error::{Error, Result};
use crate::fs::MediaType;
use crate::io::{ContentBytes, FileContainer, FileWrapper};

/// Import and export capability shared by every content variant
///
/// Implementors supply [`from_contents`](Self::from_contents) and
/// [`to_contents`](Self::to_contents); the container-level operations are
/// provided.
pub trait FileDocument: Sized {
    /// Media type advertised to the host for this variant.
    const MEDIA_TYPE: MediaType;

    /// Media types this variant can be imported from.
    const READABLE_CONTENT_TYPES: &'static [MediaType] = &[Self::MEDIA_TYPE];

    /// Media types this variant can be exported as.
    const WRITABLE_CONTENT_TYPES: &'static [MediaType] = &[Self::MEDIA_TYPE];

    /// Reconstructs the document from regular-file bytes.
    ///
    /// # Errors
    ///
    /// Text variants return [`EncodingInvalid`](crate::ErrorKind::EncodingInvalid)
    /// when the bytes are not UTF-8.
    fn from_contents(contents: &ContentBytes) -> Result<Self>;

    /// Returns the byte representation written on export.
    fn to_contents(&self) -> ContentBytes;

    /// Media types accepted by the host's open/import picker.
    fn readable_content_types() -> &'static [MediaType] {
        Self::READABLE_CONTENT_TYPES
    }

    /// Media types offered by the host's save/export flow.
    fn writable_content_types() -> &'static [MediaType] {
        Self::WRITABLE_CONTENT_TYPES
    }

    /// Imports the document from a host container.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerUnreadable`](crate::ErrorKind::ContainerUnreadable)
    /// when the container holds no regular-file bytes, or whatever
    /// [`from_contents`](Self::from_contents) reports.
    fn from_container<C: FileContainer + ?Sized>(container: &C) -> Result<Self> {
        let contents = container.regular_file_contents().ok_or_else(|| {
            Error::container_unreadable().with_message(format!(
                "{} import requires regular-file bytes",
                Self::MEDIA_TYPE
            ))
        })?;

        Self::from_contents(contents)
    }

    /// Exports the document into a regular-file container tagged with
    /// [`MEDIA_TYPE`](Self::MEDIA_TYPE).
    fn to_container(&self) -> FileWrapper {
        FileWrapper::regular_file(self.to_contents()).with_media_type(Self::MEDIA_TYPE)
    }

    /// Joins a filename stem with this variant's preferred extension.
    fn suggested_filename(stem: &str) -> String {
        format!("{stem}.{}", Self::MEDIA_TYPE.preferred_extension())
    }
}
