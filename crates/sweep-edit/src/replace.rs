//! Substitution over a single content string.
//!
//! Literal patterns replace non-overlapping occurrences; regex patterns
//! replace matches. Both honor [`ReplacementSpec::once`], and both substitute
//! literal replacement text verbatim - regex group syntax like `$1` is never
//! expanded.

use regex::{Captures, NoExpand, Regex};

use crate::types::{Pattern, ReplaceResult, Replacement, ReplacementSpec};

impl ReplacementSpec {
    /// Apply this spec to one content string.
    ///
    /// Returns the rewritten content and the number of matches replaced.
    /// `modified` can equal the input even with a non-zero count when the
    /// replacement text equals the matched text.
    #[must_use]
    pub fn apply(&self, content: &str) -> ReplaceResult {
        match &self.pattern {
            Pattern::Literal(needle) => {
                apply_literal(content, needle, &self.replacement, self.replace_once)
            }
            Pattern::Regex(re) => apply_regex(content, re, &self.replacement, self.replace_once),
        }
    }
}

fn apply_literal(
    content: &str,
    needle: &str,
    replacement: &Replacement,
    once: bool,
) -> ReplaceResult {
    let matches = content.match_indices(needle).count();
    let count = if once { matches.min(1) } else { matches };

    if count == 0 {
        return ReplaceResult {
            modified: content.to_string(),
            count: 0,
        };
    }

    let modified = match replacement {
        Replacement::Literal(with) => {
            if once {
                content.replacen(needle, with, 1)
            } else {
                content.replace(needle, with)
            }
        }
        Replacement::Computed(f) => {
            let mut out = String::with_capacity(content.len());
            let mut tail = 0;
            for (start, matched) in content.match_indices(needle) {
                out.push_str(&content[tail..start]);
                out.push_str(&f(matched));
                tail = start + matched.len();
                if once {
                    break;
                }
            }
            out.push_str(&content[tail..]);
            out
        }
    };

    ReplaceResult { modified, count }
}

fn apply_regex(content: &str, re: &Regex, replacement: &Replacement, once: bool) -> ReplaceResult {
    let matches = re.find_iter(content).count();
    let count = if once { matches.min(1) } else { matches };

    if count == 0 {
        return ReplaceResult {
            modified: content.to_string(),
            count: 0,
        };
    }

    // replacen with limit 0 replaces everything
    let limit = usize::from(once);
    let modified = match replacement {
        Replacement::Literal(with) => re.replacen(content, limit, NoExpand(with)).into_owned(),
        Replacement::Computed(f) => re
            .replacen(content, limit, |caps: &Captures| f(&caps[0]))
            .into_owned(),
    };

    ReplaceResult { modified, count }
}
