//! Leaf-token extraction from a parse tree.
//!
//! The layout checks work on a flat token stream, the way a tokenizer
//! would present the source. Tree-sitter's leaf nodes carry exactly that
//! information (kind, text, start position), so the stream is rebuilt by
//! walking the leaves of the tree restricted to a row range.

use std::ops::Range;

use tree_sitter::Tree;

/// One lexical token: a leaf node of the parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    /// Tree-sitter node kind (`"identifier"`, `"def"`, `"("`, ...).
    pub kind: &'static str,
    /// Source text of the token.
    pub text: &'t str,
    /// Absolute row (0-based).
    pub row: usize,
    /// Column (0-based).
    pub col: usize,
}

/// Collects the tree's leaf tokens whose start row falls inside `rows`
/// (0-based, end exclusive), in document order.
#[must_use]
pub fn lex_rows<'t>(tree: &'t Tree, source: &'t str, rows: Range<usize>) -> Vec<Token<'t>> {
    let mut tokens = Vec::new();
    if rows.is_empty() {
        return tokens;
    }

    let mut cursor = tree.root_node().walk();
    'walk: loop {
        if cursor.goto_first_child() {
            continue;
        }

        // Leaves arrive in document order, so everything past the last
        // requested row can be skipped.
        let node = cursor.node();
        let position = node.start_position();
        if position.row >= rows.end {
            break;
        }
        if rows.contains(&position.row) {
            tokens.push(Token {
                kind: node.kind(),
                text: &source[node.byte_range()],
                row: position.row,
                col: position.column,
            });
        }

        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    tokens
}
