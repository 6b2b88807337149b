//! I/O module for the container boundary
//!
//! This module provides the byte storage and the container abstraction that
//! documents are imported from and exported into.
//!
//! # Core Types
//!
//! - [`ContentBytes`]: Cheaply clonable byte payload with strict UTF-8 access
//! - [`FileWrapper`]: In-memory regular-file, directory or unreadable container
//!
//! # Traits
//!
//! - [`FileContainer`]: Read capability implemented by host containers

mod container;
mod content_bytes;

// Re-export core types and traits
pub use container::{FileContainer, FileWrapper};
pub use content_bytes::ContentBytes;
