#![allow(clippy::doc_markdown)]

//! sweep-io - Safe text I/O and directory enumeration for Sweep
//!
//! The filesystem collaborator layer of the Sweep workspace: everything the
//! replacement engine asks the disk for goes through this crate.
//!
//! # Features
//!
//! - **Safe reads**: size limits and binary detection before any decoding
//! - **Lossy decoding**: invalid UTF-8 never fails a read
//! - **Flat enumeration**: one call yields every regular file under a root
//!
//! # Architecture
//!
//! ```text
//! sweep-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum (thiserror)
//! ├── text.rs     # Safe async text reading
//! └── discover.rs # Recursive file enumeration (walkdir)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sweep_io::{enumerate_files, read_text};
//!
//! let files = enumerate_files("/project".as_ref())?;
//! let content = read_text(&files[0], 1024 * 1024).await?;
//! ```

mod discover;
mod error;
mod text;

pub use discover::enumerate_files;
pub use error::IoError;
pub use text::read_text;
