//! Parsed Python source files.

use tree_sitter::{Node, Parser, Point, Tree};

use crate::checker::CheckError;

/// A Python source file together with its parse tree.
///
/// Owns the raw text; lines are derived on demand. The tree is parsed once
/// and read-only afterwards.
#[derive(Debug)]
pub struct SourceFile {
    source: String,
    tree: Tree,
    line_count: usize,
}

impl SourceFile {
    /// Parses Python source text.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Parse`] when the source contains syntax
    /// errors; no partial results are produced for malformed input.
    pub fn parse(source: impl Into<String>) -> Result<Self, CheckError> {
        let source = source.into();
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        let tree = parser.parse(&source, None).ok_or(CheckError::NoTree)?;

        if tree.root_node().has_error() {
            let point = first_error(tree.root_node()).unwrap_or_else(|| Point::new(0, 0));
            return Err(CheckError::Parse {
                line: point.row + 1,
                column: point.column,
            });
        }

        let line_count = source.lines().count();
        Ok(Self {
            source,
            tree,
            line_count,
        })
    }

    /// The raw source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parse tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Total number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Returns line `number` (1-based), without its terminator.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.source.lines().nth(idx))
    }
}

/// Position of the first error or missing node under `node`, pre-order.
fn first_error(node: Node<'_>) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error(child) {
            return Some(point);
        }
    }
    Some(node.start_position())
}
