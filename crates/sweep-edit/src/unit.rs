//! Single-file transform unit.
//!
//! One unit owns the full read-transform-write sequence for exactly one
//! file and reports exactly one terminal outcome. Units share nothing with
//! each other; the read always completes before the write is attempted.

use std::path::PathBuf;

use tokio::fs as tokio_fs;

use crate::error::UnitError;
use crate::types::{FileOutcome, ReplacementSpec};

/// Run one file through the spec and report its terminal outcome.
///
/// A read failure means no write is attempted. An unchanged result means no
/// write occurs at all, leaving the file byte-identical on disk. A write
/// failure is recorded but not retried.
pub(crate) async fn transform_file(
    path: PathBuf,
    spec: &ReplacementSpec,
    max_file_size: u64,
) -> FileOutcome {
    let content = match sweep_io::read_text(&path, max_file_size).await {
        Ok(content) => content,
        Err(error) => {
            return FileOutcome::Failed {
                path,
                error: UnitError::Read(error),
            };
        }
    };

    let result = spec.apply(&content);
    if result.modified == content {
        return FileOutcome::Unchanged(path);
    }

    match tokio_fs::write(&path, result.modified.as_bytes()).await {
        Ok(()) => FileOutcome::Succeeded {
            path,
            replacements: result.count,
        },
        Err(error) => FileOutcome::Failed {
            path,
            error: UnitError::Write(error),
        },
    }
}
