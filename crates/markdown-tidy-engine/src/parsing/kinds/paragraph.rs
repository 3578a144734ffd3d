use super::super::classify::LineClass;
use crate::tree::Node;

/// Consumes a fallback text run starting at `start`.
///
/// The run extends while lines are non-blank and carry no `-` at column
/// zero. Lines opening with `#` or `|` are absorbed into the paragraph
/// rather than terminating it, and an indented list marker does not stop
/// the run either; only the column-zero dash does.
pub fn consume_run(lines: &[&str], classes: &[LineClass], start: usize) -> (Node, usize) {
    let mut end = start;
    while end < lines.len() && !classes[end].is_blank && !classes[end].dash_at_start {
        end += 1;
    }

    let text = lines[start..end].join("\n");

    (Node::Paragraph { text }, end)
}
