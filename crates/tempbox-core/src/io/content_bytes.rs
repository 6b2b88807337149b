//! Byte storage shared by containers and documents
//!
//! This module provides the [`ContentBytes`] wrapper used as the payload of
//! every [`FileWrapper`](super::FileWrapper) and binary document.

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// A wrapper around `Bytes` for content storage.
///
/// This struct wraps `bytes::Bytes` and provides additional methods
/// for text conversion. It's cheap to clone as `Bytes` uses reference
/// counting internally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentBytes(Bytes);

impl ContentBytes {
    /// Creates a new `ContentBytes` from raw bytes.
    #[must_use]
    pub fn new(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// Returns the size of the content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the content as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decodes the content as UTF-8.
    ///
    /// Decoding is strict: invalid sequences are never replaced.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodingInvalid`](crate::ErrorKind::EncodingInvalid)
    /// error naming the offset of the first invalid byte.
    pub fn to_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.0).map_err(|e| {
            Error::encoding_invalid()
                .with_message(format!(
                    "invalid utf-8 sequence at byte {}",
                    e.valid_up_to()
                ))
                .with_source(e)
        })
    }

    /// Returns the underlying `Bytes`.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Consumes and returns the underlying `Bytes`.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Computes the SHA256 digest of the content.
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        let digest = Sha256::digest(self.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }

    /// Returns the SHA256 digest as a lowercase hex string.
    #[must_use]
    pub fn sha256_hex(&self) -> String {
        hex::encode(self.sha256())
    }

    /// Returns a pretty formatted size string.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn pretty_size(&self) -> String {
        let bytes = self.len();
        match bytes {
            0..=1023 => format!("{bytes} B"),
            1024..=1_048_575 => format!("{:.1} KB", bytes as f64 / 1024.0),
            1_048_576..=1_073_741_823 => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
            _ => format!("{:.1} GB", bytes as f64 / 1_073_741_824.0),
        }
    }
}

impl Deref for ContentBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ContentBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for ContentBytes {
    fn from(s: &str) -> Self {
        Self(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for ContentBytes {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl From<&[u8]> for ContentBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for ContentBytes {
    fn from(bytes: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<u8>> for ContentBytes {
    fn from(vec: Vec<u8>) -> Self {
        Self(Bytes::from(vec))
    }
}

impl From<Bytes> for ContentBytes {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<ContentBytes> for Bytes {
    fn from(content: ContentBytes) -> Self {
        content.0
    }
}

impl fmt::Display for ContentBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(text) => write!(f, "{text}"),
            Err(_) => write!(f, "[Binary data: {} bytes]", self.len()),
        }
    }
}
