//! Line-level diagnostic suppression.

use regex::Regex;

/// Recognizes `# noqa` suppression markers on a source line.
///
/// This is the default suppression predicate; hosts embedding the checker
/// can install their own via [`crate::Checker::with_suppressor`].
pub struct NoqaFilter {
    marker: Regex,
}

impl NoqaFilter {
    /// Compiles the marker pattern.
    #[must_use]
    pub fn new() -> Self {
        // Same convention pycodestyle uses: `# noqa`, any case, optional
        // whitespace after the hash.
        Self {
            marker: Regex::new(r"(?i)#\s*noqa\b").expect("noqa pattern is valid"),
        }
    }

    /// Whether `line` carries a suppression marker.
    #[must_use]
    pub fn is_suppressed(&self, line: &str) -> bool {
        self.marker.is_match(line)
    }
}

impl Default for NoqaFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_marker_matches() {
        let filter = NoqaFilter::new();
        assert!(filter.is_suppressed("def foo(a):  # noqa"));
        assert!(filter.is_suppressed("def foo(a):  #noqa"));
    }

    #[test]
    fn marker_is_case_insensitive() {
        let filter = NoqaFilter::new();
        assert!(filter.is_suppressed("def foo(a):  # NOQA"));
    }

    #[test]
    fn marker_with_codes_matches() {
        let filter = NoqaFilter::new();
        assert!(filter.is_suppressed("def foo(a):  # noqa: FD101"));
    }

    #[test]
    fn unmarked_lines_pass() {
        let filter = NoqaFilter::new();
        assert!(!filter.is_suppressed("def foo(a):"));
        assert!(!filter.is_suppressed("# a comment that mentions noqable things"));
    }
}
