#![allow(clippy::doc_markdown)]

//! sweep-edit - Concurrent in-place text replacement for Sweep
//!
//! Rewrites every matching file under a directory tree and reports a
//! structured per-file and aggregate result. One call fans out an independent
//! read-transform-write unit per matched file, collects their outcomes over a
//! completion channel, and resolves once every unit has reported or the run
//! deadline fires.
//!
//! # Features
//!
//! - **Literal and regex patterns**: all non-overlapping matches, or only the
//!   first with [`ReplacementSpec::once`]
//! - **Computed replacements**: replacement text derived per match
//! - **Isolated failures**: one file's read or write error never aborts the
//!   run; it becomes a [`FailedEntry`] in the report
//! - **Global deadline**: the run fails with [`RunError::Timeout`] instead of
//!   returning a partial report
//!
//! # Architecture
//!
//! ```text
//! sweep-edit/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # RunError, ScanError, UnitError (thiserror)
//! ├── types.rs    # ReplacementSpec, RunOptions, FileOutcome, RunReport
//! ├── replace.rs  # Substitution over one content string
//! ├── matcher.rs  # Glob and extension matcher constructors
//! ├── unit.rs     # Single-file transform unit
//! └── runner.rs   # Run coordinator (fan-out, collect, deadline)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sweep_edit::{matcher, replace_in_files, ReplacementSpec, RunOptions};
//!
//! let spec = ReplacementSpec::literal("bar", "baz");
//! let report = replace_in_files(
//!     "/project",
//!     matcher::extension("txt"),
//!     spec,
//!     RunOptions::default(),
//! )
//! .await?;
//! assert_eq!(report.failed_count, 0);
//! ```

mod error;
pub mod matcher;
mod replace;
mod runner;
mod types;
mod unit;

pub use error::{RunError, ScanError, UnitError};
pub use runner::replace_in_files;
pub use types::{
    FailedEntry, FileOutcome, Pattern, ReplaceResult, Replacement, ReplacementSpec, RunOptions,
    RunReport,
};
