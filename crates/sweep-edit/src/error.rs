//! Error types for replacement runs.
//!
//! Three errors are terminal for a whole run; a unit's read or write failure
//! is not among them - those fold into the report's failed entries.

use std::path::PathBuf;
use std::time::Duration;

use sweep_io::IoError;
use thiserror::Error;

/// Terminal errors for a whole run.
///
/// When any of these is returned, no report was produced at all.
#[derive(Error, Debug)]
pub enum RunError {
    /// Caller misuse, detected before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The root directory could not be turned into a usable file set.
    #[error("directory scan failed: {0}")]
    Scan(#[from] ScanError),

    /// The deadline elapsed before every dispatched unit reported back.
    #[error("run timed out after {limit:?} ({completed} of {dispatched} files reported)")]
    Timeout {
        /// Configured wall-clock limit for the run.
        limit: Duration,
        /// Outcomes recorded before the deadline fired.
        completed: usize,
        /// Units dispatched for this run.
        dispatched: usize,
    },
}

/// Why enumeration of the root directory failed.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root is missing, not a directory, or unreadable.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Enumeration succeeded but the tree holds no files at all.
    #[error("no files under {0}")]
    EmptyTree(PathBuf),
}

/// Why a single file's unit failed.
///
/// Either way the unit still reports, the path is tallied, and the run
/// carries on.
#[derive(Error, Debug)]
pub enum UnitError {
    /// The file could not be read as text; no write was attempted.
    #[error("read failed: {0}")]
    Read(#[from] IoError),

    /// The rewritten content could not be written back.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}
