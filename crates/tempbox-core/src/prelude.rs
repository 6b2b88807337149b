//! Convenient re-exports for common use.

pub use crate::document::{
    AnyDocument, CsvDocument, DataDocument, EncodeJson, FileDocument, JsonDocument, JsonStyle,
    TextDocument,
};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::fs::{ContentFile, MediaType};
pub use crate::io::{ContentBytes, FileContainer, FileWrapper};
