//! Run coordinator.
//!
//! One invocation owns one run: validate, enumerate, filter, fan out one
//! unit per matched file, collect outcomes over a completion channel until
//! the tally settles or the deadline fires, then fold the report. All run
//! state lives in this call frame, so concurrent runs stay independent.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;

use sweep_io::enumerate_files;

use crate::error::{RunError, ScanError};
use crate::types::{FileOutcome, Pattern, ReplacementSpec, RunOptions, RunReport};
use crate::unit;

/// Rewrite every matched file under `root` and report per-file outcomes.
///
/// Enumerates the tree, filters through `matcher`, and dispatches one
/// independent transform unit per matched file - all concurrent, with no
/// ordering between units. The call resolves once every unit has reported,
/// or fails with [`RunError::Timeout`] when the deadline elapses first; a
/// partial report is never returned. Units are not cancelled on timeout: a
/// write already in flight may still land afterward, but its outcome is
/// discarded and cannot leak into a later run.
///
/// A single file's read or write failure never fails the run; it becomes a
/// [`crate::FailedEntry`] in the report.
///
/// # Errors
/// - [`RunError::InvalidArgument`] for an empty root path, empty pattern,
///   zero timeout, or zero max file size (checked before any I/O)
/// - [`RunError::Scan`] when the root cannot be enumerated or the tree holds
///   no files at all (a tree with files but no *matches* is a successful
///   empty report instead)
/// - [`RunError::Timeout`] when the deadline elapses with units outstanding
pub async fn replace_in_files<P, M>(
    root: P,
    matcher: M,
    spec: ReplacementSpec,
    options: RunOptions,
) -> Result<RunReport, RunError>
where
    P: AsRef<Path>,
    M: Fn(&Path) -> bool,
{
    let root = root.as_ref();
    validate(root, &spec, &options)?;

    let files = enumerate_files(root).map_err(|e| RunError::Scan(ScanError::Io(e)))?;
    if files.is_empty() {
        return Err(RunError::Scan(ScanError::EmptyTree(root.to_path_buf())));
    }

    let matched: Vec<PathBuf> = files.into_iter().filter(|path| matcher(path)).collect();
    let matched_file_count = matched.len();
    if matched_file_count == 0 {
        tracing::debug!("no files matched under {}", root.display());
        return Ok(RunReport::from_outcomes(0, Vec::new()));
    }

    tracing::debug!(
        "dispatching {matched_file_count} transform units under {}",
        root.display()
    );

    let spec = Arc::new(spec);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FileOutcome>(matched_file_count);

    for path in matched {
        let spec = Arc::clone(&spec);
        let outcome_tx = outcome_tx.clone();
        let max_file_size = options.max_file_size;
        tokio::spawn(async move {
            let outcome = unit::transform_file(path, &spec, max_file_size).await;
            // After a timeout the receiver is gone; late outcomes are dropped.
            let _ = outcome_tx.send(outcome).await;
        });
    }
    drop(outcome_tx);

    let deadline = Instant::now() + options.timeout;
    let mut outcomes: Vec<FileOutcome> = Vec::with_capacity(matched_file_count);

    while outcomes.len() < matched_file_count {
        match tokio::time::timeout_at(deadline, outcome_rx.recv()).await {
            Ok(Some(outcome)) => {
                if let FileOutcome::Failed { path, error } = &outcome {
                    tracing::warn!("unit failed for {}: {error}", path.display());
                } else {
                    tracing::trace!("unit finished for {}", outcome.path().display());
                }
                outcomes.push(outcome);
            }
            Ok(None) => {
                // Every unit sends exactly once, so a closed channel before a
                // full tally means a unit died without reporting. The tally
                // can never settle; wait out the deadline and fail the run.
                tracing::warn!(
                    "outcome channel closed with {} of {matched_file_count} units reported",
                    outcomes.len()
                );
                tokio::time::sleep_until(deadline).await;
                return Err(RunError::Timeout {
                    limit: options.timeout,
                    completed: outcomes.len(),
                    dispatched: matched_file_count,
                });
            }
            Err(_) => {
                tracing::warn!(
                    "run deadline elapsed with {} of {matched_file_count} units reported",
                    outcomes.len()
                );
                return Err(RunError::Timeout {
                    limit: options.timeout,
                    completed: outcomes.len(),
                    dispatched: matched_file_count,
                });
            }
        }
    }

    Ok(RunReport::from_outcomes(matched_file_count, outcomes))
}

/// Reject caller misuse before any I/O happens.
fn validate(root: &Path, spec: &ReplacementSpec, options: &RunOptions) -> Result<(), RunError> {
    if root.as_os_str().is_empty() {
        return Err(RunError::InvalidArgument(
            "directory path is empty".to_string(),
        ));
    }

    let pattern_empty = match &spec.pattern {
        Pattern::Literal(needle) => needle.is_empty(),
        Pattern::Regex(re) => re.as_str().is_empty(),
    };
    if pattern_empty {
        return Err(RunError::InvalidArgument("pattern is empty".to_string()));
    }

    if options.timeout.is_zero() {
        return Err(RunError::InvalidArgument(
            "timeout must be non-zero".to_string(),
        ));
    }

    if options.max_file_size == 0 {
        return Err(RunError::InvalidArgument(
            "max file size must be non-zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn any_file(_: &Path) -> bool {
        true
    }

    #[tokio::test]
    async fn test_empty_root_path_is_invalid() {
        let result = replace_in_files(
            "",
            any_file,
            ReplacementSpec::literal("a", "b"),
            RunOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(RunError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_empty_pattern_is_invalid() {
        let dir = TempDir::new().expect("Create temp dir");
        let result = replace_in_files(
            dir.path(),
            any_file,
            ReplacementSpec::literal("", "b"),
            RunOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(RunError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_zero_timeout_is_invalid() {
        let dir = TempDir::new().expect("Create temp dir");
        let result = replace_in_files(
            dir.path(),
            any_file,
            ReplacementSpec::literal("a", "b"),
            RunOptions {
                timeout: Duration::ZERO,
                ..RunOptions::default()
            },
        )
        .await;
        assert!(matches!(result, Err(RunError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_missing_root_is_scan_error() {
        let result = replace_in_files(
            "/nonexistent/tree",
            any_file,
            ReplacementSpec::literal("a", "b"),
            RunOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(RunError::Scan(ScanError::Io(_)))));
    }

    #[tokio::test]
    async fn test_empty_tree_is_scan_error() {
        let dir = TempDir::new().expect("Create temp dir");
        let result = replace_in_files(
            dir.path(),
            any_file,
            ReplacementSpec::literal("a", "b"),
            RunOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(RunError::Scan(ScanError::EmptyTree(_)))));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_report() {
        let dir = TempDir::new().expect("Create temp dir");
        std::fs::write(dir.path().join("a.txt"), "bar").expect("Seed file");

        let report = replace_in_files(
            dir.path(),
            |_: &Path| false,
            ReplacementSpec::literal("bar", "baz"),
            RunOptions::default(),
        )
        .await
        .expect("Run");

        assert_eq!(report.matched_file_count, 0);
        assert_eq!(report.succeeded_count, 0);
        assert_eq!(report.failed_count, 0);
    }
}
