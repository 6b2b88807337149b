#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for filesystem container operations.
pub const TRACING_TARGET_FS: &str = "tempbox_core::fs";

mod error;

pub mod document;
pub mod fs;
pub mod io;

#[doc(hidden)]
pub mod prelude;

// Re-export key types for convenience
pub use error::{BoxedError, Error, ErrorKind, Result};
