//! Core type system and error handling for globcp
//!
//! This crate provides the foundational types shared across the globcp
//! workspace:
//!
//! - **Error handling**: structured error types with kind categorization
//! - **File descriptors**: source and destination descriptors for copy
//!   operations
//! - **Statistics**: aggregate counters for one copy batch
//!
//! # Features
//!
//! - `serde`: Enable serialization support for descriptors and errors
//!
//! # Examples
//!
//! ```rust
//! use globcp_types::SourceFile;
//!
//! let file = SourceFile::new("/work/src/a.txt").with_base("/work/src");
//! assert_eq!(file.relative_path(), std::path::PathBuf::from("a.txt"));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod file;
pub mod result;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use file::{CopiedFile, SourceFile};
pub use result::Result;
pub use stats::CopyStats;
