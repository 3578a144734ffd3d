//! Pre-order tree dump for diagnostics.
//!
//! One line per node, indented by depth, showing the node kind and its
//! scalar attributes. Output is for human eyes only and is not part of
//! the formatting contract.

use crate::tree::{Document, Node};

/// Renders the node tree as indented text, one node per line.
pub fn render(doc: &Document) -> String {
    let mut out = String::from("Document\n");
    render_nodes(&mut out, doc.children(), 1);
    out
}

fn render_nodes(out: &mut String, nodes: &[Node], depth: usize) {
    for node in nodes {
        out.push_str(&"  ".repeat(depth));
        match node {
            Node::Heading { level, text } => {
                out.push_str(&format!("Heading(level: {level}, text: {text})\n"));
            }
            Node::Paragraph { text } => {
                out.push_str(&format!("Paragraph(text: {text})\n"));
            }
            Node::List { .. } => out.push_str("List\n"),
            Node::ListElement { level, text } => {
                out.push_str(&format!("ListElement(level: {level}, text: {text})\n"));
            }
            Node::ListEnd => out.push_str("ListEnd\n"),
            Node::Table { .. } => out.push_str("Table\n"),
            Node::TableRow { .. } => out.push_str("TableRow\n"),
            Node::TableElement { text } => {
                out.push_str(&format!("TableElement(text: {text})\n"));
            }
        }

        render_nodes(out, node.children(), depth + 1);
    }
}
