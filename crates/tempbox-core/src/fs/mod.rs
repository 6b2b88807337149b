//! Filesystem module for content file operations
//!
//! This module provides the host side of the container boundary for the
//! local filesystem, together with the media types used to tag containers.
//!
//! # Core Types
//!
//! - [`ContentFile`]: A path that loads into and saves from a [`FileWrapper`]
//! - [`MediaType`]: Declared media type of exportable content
//!
//! # Example
//!
//! ```no_run
//! use tempbox_core::document::{FileDocument, TextDocument};
//! use tempbox_core::fs::ContentFile;
//!
//! async fn example() -> tempbox_core::Result<()> {
//!     let document = TextDocument::new("Hello, world!");
//!     let target = ContentFile::new(TextDocument::suggested_filename("greeting"));
//!     target.save(&document.to_container()).await?;
//!
//!     let restored = TextDocument::from_container(&target.load().await?)?;
//!     assert_eq!(restored.text(), "Hello, world!");
//!     Ok(())
//! }
//! ```
//!
//! [`FileWrapper`]: crate::io::FileWrapper

mod content_file;
mod media_type;

// Re-export main types
pub use content_file::ContentFile;
pub use media_type::MediaType;
