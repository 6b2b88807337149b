//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Used as the source of structured errors and as the failure type of the
/// [`EncodeJson`](crate::document::EncodeJson) capability.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors raised while moving content in and out of containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The container holds no regular-file bytes (directory or invalid handle).
    ContainerUnreadable,
    /// The bytes are not valid UTF-8 for a text variant.
    EncodingInvalid,
    /// A string could not be represented as UTF-8 before export.
    StringEncodingFailed,
    /// A caller-supplied object failed to encode itself as JSON.
    ObjectEncodingFailed,
    /// JSON bytes could not be decoded into the requested type.
    ObjectDecodingFailed,
    /// Input validation failed.
    InvalidInput,
    /// Filesystem I/O failed.
    Io,
}

/// A structured error type for tempbox-core operations.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Adds an already boxed source error to this error.
    pub fn with_boxed_source(mut self, source: BoxedError) -> Self {
        self.source = Some(source);
        self
    }

    /// Creates a new container unreadable error.
    pub fn container_unreadable() -> Self {
        Self::new(ErrorKind::ContainerUnreadable)
    }

    /// Creates a new invalid encoding error.
    pub fn encoding_invalid() -> Self {
        Self::new(ErrorKind::EncodingInvalid)
    }

    /// Creates a new string encoding error.
    pub fn string_encoding_failed() -> Self {
        Self::new(ErrorKind::StringEncodingFailed)
    }

    /// Creates a new object encoding error.
    pub fn object_encoding_failed() -> Self {
        Self::new(ErrorKind::ObjectEncodingFailed)
    }

    /// Creates a new object decoding error.
    pub fn object_decoding_failed() -> Self {
        Self::new(ErrorKind::ObjectDecodingFailed)
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io)
            .with_message("filesystem operation failed")
            .with_source(err)
    }
}
