//! Locating function definitions and their textual extent.
//!
//! Tree-sitter does not expose "the statement after this one" directly, so
//! a definition's extent is recovered from sibling/ancestor navigation:
//! the definition ends where the next node in document order begins, or at
//! end of file when nothing follows.

use tree_sitter::{Node, Tree};

/// One function definition found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Declared name.
    pub name: String,
    /// Line (1-based) of the `def` keyword.
    pub start_line: usize,
    /// Extent bound: the start line of the next node in document order
    /// minus one, or the file's total line count when nothing follows.
    pub end_line: usize,
}

/// Collects every function definition (sync and async) in document order.
///
/// `line_count` is the total number of lines in the file backing `tree`;
/// it bounds the extent of the last definition.
#[must_use]
pub fn definitions(tree: &Tree, source: &str, line_count: usize) -> Vec<Definition> {
    let mut defs = Vec::new();
    collect(tree.root_node(), source.as_bytes(), line_count, &mut defs);
    defs
}

fn collect(node: Node<'_>, src: &[u8], line_count: usize, out: &mut Vec<Definition>) {
    if node.kind() == "function_definition" {
        if let Some(def) = describe(node, src, line_count) {
            out.push(def);
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect(child, src, line_count, out);
    }
}

fn describe(node: Node<'_>, src: &[u8], line_count: usize) -> Option<Definition> {
    let name_node = node.child_by_field_name("name")?;
    let name = std::str::from_utf8(&src[name_node.byte_range()])
        .ok()?
        .to_owned();
    let start_line = node.start_position().row + 1;
    let end_line = match next_start_line(node) {
        Some(next) => next - 1,
        None => line_count,
    };
    Some(Definition {
        name,
        start_line,
        end_line,
    })
}

/// Start line (1-based) of the node immediately following `node` in
/// document order: its next named sibling if any, else the nearest
/// ancestor's next named sibling. `None` when `node` closes the file.
///
/// Comment nodes are skipped; they are not statements and must not
/// truncate a definition's extent. The node must belong to the walked
/// tree (guaranteed here, since every node comes from [`definitions`]).
fn next_start_line(node: Node<'_>) -> Option<usize> {
    let mut current = node;
    loop {
        let mut sibling = current.next_named_sibling();
        while let Some(next) = sibling {
            if next.kind() != "comment" {
                return Some(next.start_position().row + 1);
            }
            sibling = next.next_named_sibling();
        }
        current = current.parent()?;
    }
}
