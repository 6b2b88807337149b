//! File containers exchanged with the host
//!
//! This module provides the [`FileContainer`] capability that documents read
//! from, and the [`FileWrapper`] value they export into.

use super::ContentBytes;
use crate::fs::MediaType;

/// Read capability of a host-provided file container
///
/// Hosts (file pickers, drag-and-drop, "Save As" flows) implement this for
/// whatever handle they hand to the document layer. A container either holds
/// regular-file bytes or it does not; there is no partial state.
pub trait FileContainer {
    /// Returns the regular-file bytes, or `None` when the container is a
    /// directory or its read handle is invalid.
    fn regular_file_contents(&self) -> Option<&ContentBytes>;

    /// Returns the filename the host proposed for this container, if any.
    fn preferred_filename(&self) -> Option<&str> {
        None
    }
}

impl<C: FileContainer + ?Sized> FileContainer for &C {
    fn regular_file_contents(&self) -> Option<&ContentBytes> {
        (**self).regular_file_contents()
    }

    fn preferred_filename(&self) -> Option<&str> {
        (**self).preferred_filename()
    }
}

impl<C: FileContainer + ?Sized> FileContainer for Box<C> {
    fn regular_file_contents(&self) -> Option<&ContentBytes> {
        (**self).regular_file_contents()
    }

    fn preferred_filename(&self) -> Option<&str> {
        (**self).preferred_filename()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileNode {
    RegularFile(ContentBytes),
    Directory(Vec<String>),
    Unreadable,
}

/// In-memory file container
///
/// Documents export into a `FileWrapper` holding a regular file; hosts can
/// also build directory or unreadable wrappers to describe what a picker
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrapper {
    node: FileNode,
    media_type: MediaType,
    preferred_filename: Option<String>,
}

impl FileWrapper {
    /// Wraps bytes as a regular file ready for the host's write path
    ///
    /// # Example
    ///
    /// ```
    /// use tempbox_core::io::{FileContainer, FileWrapper};
    ///
    /// let wrapper = FileWrapper::regular_file("hello");
    /// assert_eq!(wrapper.regular_file_contents().unwrap().as_bytes(), b"hello");
    /// ```
    pub fn regular_file(contents: impl Into<ContentBytes>) -> Self {
        Self {
            node: FileNode::RegularFile(contents.into()),
            media_type: MediaType::default(),
            preferred_filename: None,
        }
    }

    /// Creates a directory container listing the given entry names
    pub fn directory<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            node: FileNode::Directory(entries.into_iter().map(Into::into).collect()),
            media_type: MediaType::default(),
            preferred_filename: None,
        }
    }

    /// Creates a container whose read handle is invalid
    #[must_use]
    pub fn unreadable() -> Self {
        Self {
            node: FileNode::Unreadable,
            media_type: MediaType::default(),
            preferred_filename: None,
        }
    }

    /// Sets the declared media type
    #[must_use]
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    /// Sets the filename proposed to the host
    #[must_use]
    pub fn with_preferred_filename(mut self, filename: impl Into<String>) -> Self {
        self.preferred_filename = Some(filename.into());
        self
    }

    /// Returns the declared media type
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Returns `true` when the wrapper holds regular-file bytes
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        matches!(self.node, FileNode::RegularFile(_))
    }

    /// Returns `true` when the wrapper describes a directory
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self.node, FileNode::Directory(_))
    }

    /// Returns the entry names of a directory wrapper
    #[must_use]
    pub fn directory_entries(&self) -> Option<&[String]> {
        match &self.node {
            FileNode::Directory(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the size of the regular-file bytes, zero otherwise
    #[must_use]
    pub fn len(&self) -> usize {
        self.regular_file_contents().map_or(0, ContentBytes::len)
    }

    /// Returns `true` when there are no regular-file bytes to write
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the SHA256 digest of the regular-file bytes as hex
    #[must_use]
    pub fn sha256_hex(&self) -> Option<String> {
        self.regular_file_contents().map(ContentBytes::sha256_hex)
    }

    /// Consumes the wrapper and returns its regular-file bytes
    #[must_use]
    pub fn into_contents(self) -> Option<ContentBytes> {
        match self.node {
            FileNode::RegularFile(contents) => Some(contents),
            _ => None,
        }
    }
}

impl FileContainer for FileWrapper {
    fn regular_file_contents(&self) -> Option<&ContentBytes> {
        match &self.node {
            FileNode::RegularFile(contents) => Some(contents),
            FileNode::Directory(_) | FileNode::Unreadable => None,
        }
    }

    fn preferred_filename(&self) -> Option<&str> {
        self.preferred_filename.as_deref()
    }
}
