//! # Canonical re-emission
//!
//! Walks the block tree depth-first and rebuilds the document text with
//! fixed spacing: every block terminates with a blank line, list elements
//! are indented two spaces per level, and tables are re-aligned from
//! scratch by the `table` module. The walk is a pure function of the
//! tree; source whitespace plays no part.

mod table;

use crate::tree::{Document, Node};

/// Renders a document back to canonical text.
///
/// Every block emits a trailing blank line; the final pass drops the last
/// newline so output ends with a single one. An empty document renders as
/// the empty string; the trim is skipped rather than underflowing.
pub fn format(doc: &Document) -> String {
    let mut out = String::new();
    render_nodes(&mut out, doc.children());

    if out.ends_with("\n\n") {
        out.truncate(out.len() - 1);
    }

    out
}

fn render_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Heading { level, text } => {
                out.push_str(&"#".repeat(*level));
                out.push(' ');
                out.push_str(text);
                out.push_str("\n\n");
            }
            Node::Paragraph { text } => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            // The list itself emits nothing; its elements follow.
            Node::List { .. } => {}
            Node::ListElement { level, text } => {
                out.push_str(&"  ".repeat(level.saturating_sub(1)));
                out.push_str("- ");
                out.push_str(text);
                out.push('\n');
            }
            Node::ListEnd => out.push('\n'),
            Node::Table { rows } => table::render(out, rows),
            // Rows and cells are consumed by the table pass.
            Node::TableRow { .. } | Node::TableElement { .. } => {}
        }

        render_nodes(out, node.children());
    }
}
