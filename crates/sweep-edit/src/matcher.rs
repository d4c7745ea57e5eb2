//! File matcher constructors.
//!
//! A run takes any `Fn(&Path) -> bool`; these helpers build the two
//! predicates callers reach for most. A glob like `*.txt` matches across
//! directory separators, so it selects every `.txt` file in the tree.

use std::path::Path;

use globset::Glob;

/// Build a matcher from a glob pattern.
///
/// # Errors
/// Returns the glob compilation error for an invalid pattern.
///
/// # Example
///
/// ```rust,ignore
/// let txt = matcher::glob("*.txt")?;
/// assert!(txt(Path::new("/tree/notes/a.txt")));
/// ```
pub fn glob(pattern: &str) -> Result<impl Fn(&Path) -> bool + Send + Sync + use<>, globset::Error> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    Ok(move |path: &Path| matcher.is_match(path))
}

/// Build a matcher selecting files by extension, case-insensitive.
///
/// The leading dot is optional: `"txt"` and `".txt"` are equivalent.
#[must_use]
pub fn extension(ext: &str) -> impl Fn(&Path) -> bool + Send + Sync + use<> {
    let want = ext.trim_start_matches('.').to_ascii_lowercase();
    move |path: &Path| {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&want))
    }
}
