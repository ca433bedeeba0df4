//! Checker orchestration: parse, locate, suppress, dispatch.

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::locator;
use crate::source::SourceFile;
use crate::style::Style;
use crate::suppress::NoqaFilter;
use crate::token;
use crate::types::Diagnostic;

/// Errors that can occur while checking a source file.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The source is not valid Python.
    #[error("syntax error at {line}:{column}")]
    Parse {
        /// Line (1-based) of the first syntax error.
        line: usize,
        /// Column (0-based) of the first syntax error.
        column: usize,
    },

    /// The Python grammar was rejected by the Tree-sitter runtime.
    #[error("failed to load Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree at all.
    #[error("parser produced no tree")]
    NoTree,
}

type SuppressFn = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Checks Python sources for function-definition layout violations.
///
/// One checker holds one style selection; configuration is supplied at
/// construction and read-only afterwards. Checking the same input twice
/// yields the same diagnostics in the same order.
pub struct Checker {
    style: Style,
    suppress: SuppressFn,
}

impl Checker {
    /// Creates a checker from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_style(config.style)
    }

    /// Creates a checker for a specific style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        let noqa = NoqaFilter::new();
        Self {
            style,
            suppress: Box::new(move |line| noqa.is_suppressed(line)),
        }
    }

    /// Replaces the suppression predicate.
    ///
    /// The predicate receives the text of a definition's declared start
    /// line and returns true when that definition must yield no
    /// diagnostics. The default predicate recognizes `# noqa` markers.
    #[must_use]
    pub fn with_suppressor<F>(mut self, suppress: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.suppress = Box::new(suppress);
        self
    }

    /// The style this checker enforces.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Parses `source` and collects all diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Parse`] for malformed source; no partial
    /// results are produced.
    pub fn check(&self, source: &str) -> Result<Vec<Diagnostic>, CheckError> {
        let file = SourceFile::parse(source)?;
        Ok(self.diagnostics(&file).collect())
    }

    /// Lazily yields diagnostics for an already parsed file.
    ///
    /// Diagnostics come in document order of the definitions that produced
    /// them; within one definition, FD103 precedes FD101 precedes FD102.
    /// The sequence is pull-driven, so a host enforcing a per-file cap can
    /// stop consuming early.
    pub fn diagnostics<'c>(&'c self, file: &'c SourceFile) -> impl Iterator<Item = Diagnostic> + 'c {
        let defs = locator::definitions(file.tree(), file.source(), file.line_count());
        debug!(definitions = defs.len(), "collected function definitions");
        defs.into_iter()
            .filter(move |def| {
                let start_line = file.line(def.start_line).unwrap_or("");
                !(self.suppress)(start_line)
            })
            .flat_map(move |def| {
                let rows = def.start_line - 1..def.end_line.saturating_sub(1);
                let tokens = token::lex_rows(file.tree(), file.source(), rows);
                self.style.check(&def, &tokens)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Code;

    fn checker() -> Checker {
        Checker::new(&Config::default())
    }

    #[test]
    fn clean_file_yields_nothing() {
        let diagnostics = checker().check("def foo(a, b):\n    pass\n").unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn check_is_idempotent() {
        let source = "def foo(\n    a, b):\n    pass\n";
        let first = checker().check(source).unwrap();
        let second = checker().check(source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn diagnostics_follow_document_order() {
        let source = "def first(\n    a):\n    pass\n\ndef second(b, c\n           ):\n    pass\n";
        let diagnostics = checker().check(source).unwrap();
        let codes: Vec<Code> = diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, [Code::Fd101, Code::Fd102]);
        assert!(diagnostics[0].line < diagnostics[1].line);
    }

    #[test]
    fn noqa_on_the_def_line_suppresses() {
        let source = "def foo(  # noqa\n    a, b):\n    pass\n";
        assert!(checker().check(source).unwrap().is_empty());
    }

    #[test]
    fn noqa_elsewhere_does_not_suppress() {
        let source = "def foo(\n    a, b):  # noqa\n    pass\n";
        let diagnostics = checker().check(source).unwrap();
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn custom_suppressor_replaces_noqa() {
        let source = "def foo(\n    a, b):\n    pass\n";
        let silenced = checker().with_suppressor(|_| true);
        assert!(silenced.check(source).unwrap().is_empty());

        let strict = checker().with_suppressor(|_| false);
        assert_eq!(strict.check(source).unwrap().len(), 1);
    }

    #[test]
    fn malformed_source_is_fatal() {
        let err = checker().check("def foo(:\n    pass\n").unwrap_err();
        assert!(matches!(err, CheckError::Parse { .. }));
    }

    #[test]
    fn lazy_sequence_can_stop_early() {
        let source = "def first(\n    a):\n    pass\n\ndef second(b, c\n           ):\n    pass\n";
        let file = SourceFile::parse(source).unwrap();
        let checker = checker();
        let first = checker.diagnostics(&file).next();
        assert_eq!(first.map(|d| d.code), Some(Code::Fd101));
    }

    #[test]
    fn methods_and_nested_definitions_are_checked() {
        let source = "class C:\n    def method(self,\n               other\n               ):\n        pass\n";
        let diagnostics = checker().check(source).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Code::Fd102);
        assert_eq!(diagnostics[0].line, 4);
    }

    #[test]
    fn async_definitions_are_checked() {
        let source = "async def fetch(\n    url):\n    pass\n";
        let diagnostics = checker().check(source).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Code::Fd101);
    }
}
