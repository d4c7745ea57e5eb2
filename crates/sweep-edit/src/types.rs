//! Core types for replacement runs.
//!
//! Defines the replacement spec, run options, per-file outcomes, and the
//! aggregate report.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

use crate::error::UnitError;

/// What to look for in a file's content.
pub enum Pattern {
    /// A literal substring, matched non-overlapping.
    Literal(String),
    /// A compiled regular expression.
    Regex(Regex),
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
        }
    }
}

/// What each match is replaced with.
///
/// Two strategies: fixed text, or text computed from the matched substring.
pub enum Replacement {
    /// Fixed text, substituted verbatim (regex group syntax is not expanded).
    Literal(String),
    /// Text computed per match from the matched substring.
    Computed(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// How a single file's content is transformed.
///
/// Immutable once built; one spec is shared by every unit of a run.
///
/// # Example
///
/// ```rust,ignore
/// let spec = ReplacementSpec::literal("bar", "baz").once();
/// let result = spec.apply("bar-bar");
/// assert_eq!(result.modified, "baz-bar");
/// ```
#[derive(Debug)]
pub struct ReplacementSpec {
    /// Match target.
    pub pattern: Pattern,
    /// Replacement strategy.
    pub replacement: Replacement,
    /// Replace only the first match per file instead of all of them.
    pub replace_once: bool,
}

impl ReplacementSpec {
    /// Build a spec from any pattern and replacement.
    #[must_use]
    pub fn new(pattern: Pattern, replacement: Replacement) -> Self {
        Self {
            pattern,
            replacement,
            replace_once: false,
        }
    }

    /// Literal substring to fixed text.
    #[must_use]
    pub fn literal(needle: impl Into<String>, with: impl Into<String>) -> Self {
        Self::new(
            Pattern::Literal(needle.into()),
            Replacement::Literal(with.into()),
        )
    }

    /// Regex pattern to fixed text.
    ///
    /// # Errors
    /// Returns the regex compilation error for an invalid pattern.
    pub fn regex(pattern: &str, with: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::new(
            Pattern::Regex(Regex::new(pattern)?),
            Replacement::Literal(with.into()),
        ))
    }

    /// Any pattern to text computed from the matched substring.
    #[must_use]
    pub fn computed<F>(pattern: Pattern, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(pattern, Replacement::Computed(Box::new(f)))
    }

    /// Replace only the first match per file.
    #[must_use]
    pub fn once(mut self) -> Self {
        self.replace_once = true;
        self
    }
}

/// Outcome of applying a spec to one content string.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceResult {
    /// Content after replacement; equals the input when nothing matched.
    pub modified: String,
    /// Number of matches replaced.
    pub count: usize,
}

/// Run-level configuration.
#[derive(Debug, Clone, Serialize)]
pub struct RunOptions {
    /// Maximum wall-clock time for the whole run.
    pub timeout: Duration,
    /// Maximum file size in bytes a unit will read.
    pub max_file_size: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            max_file_size: 1024 * 1024, // 1MB
        }
    }
}

/// Terminal result recorded for one matched file.
///
/// Produced exactly once per file, never more, never fewer.
#[derive(Debug)]
pub enum FileOutcome {
    /// Nothing matched (or the replacement equals the match); no write.
    Unchanged(PathBuf),
    /// The file was rewritten in place.
    Succeeded {
        /// Path that was rewritten.
        path: PathBuf,
        /// Matches replaced in this file.
        replacements: usize,
    },
    /// The unit's read or write failed; the run carries on.
    Failed {
        /// Path the unit was working on.
        path: PathBuf,
        /// What went wrong.
        error: UnitError,
    },
}

impl FileOutcome {
    /// The file this outcome belongs to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Unchanged(path)
            | Self::Succeeded { path, .. }
            | Self::Failed { path, .. } => path,
        }
    }
}

/// One failed file in the aggregate report.
#[derive(Debug)]
pub struct FailedEntry {
    /// Path whose unit failed.
    pub path: PathBuf,
    /// Read or write failure detail.
    pub error: UnitError,
}

/// Aggregate result of one run.
///
/// Built only after every unit has reported; immutable once returned and
/// owning every path it names. Unchanged files count as successes here -
/// `changed_file_count` keeps the rewritten subset visible.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files selected by the matcher, captured before dispatch.
    pub matched_file_count: usize,
    /// Files whose unit finished without a failure (rewritten or unchanged).
    pub succeeded_count: usize,
    /// Files actually rewritten on disk.
    pub changed_file_count: usize,
    /// Total matches replaced across all files.
    pub replacement_count: usize,
    /// Non-failed paths in completion order, not matching order.
    pub succeeded_paths: Vec<PathBuf>,
    /// Files whose unit failed.
    pub failed_count: usize,
    /// Failed paths with their error details, in completion order.
    pub failed_entries: Vec<FailedEntry>,
}

impl RunReport {
    /// Fold completion-ordered outcomes into the aggregate report.
    #[must_use]
    pub(crate) fn from_outcomes(matched_file_count: usize, outcomes: Vec<FileOutcome>) -> Self {
        let mut report = Self {
            matched_file_count,
            ..Self::default()
        };

        for outcome in outcomes {
            match outcome {
                FileOutcome::Unchanged(path) => {
                    report.succeeded_count += 1;
                    report.succeeded_paths.push(path);
                }
                FileOutcome::Succeeded { path, replacements } => {
                    report.succeeded_count += 1;
                    report.changed_file_count += 1;
                    report.replacement_count += replacements;
                    report.succeeded_paths.push(path);
                }
                FileOutcome::Failed { path, error } => {
                    report.failed_count += 1;
                    report.failed_entries.push(FailedEntry { path, error });
                }
            }
        }

        report
    }
}
