use super::super::classify::LineClass;
use crate::tree::Node;

/// Consumes a contiguous run of `|`-prefixed lines starting at `start`.
///
/// Every line in the run becomes one row, in order. Rows are stored as
/// raw data: separator lines such as `| --- | --- |` are not recognized
/// here; the formatter classifies them when it re-derives alignment.
pub fn consume_run(lines: &[&str], classes: &[LineClass], start: usize) -> (Node, usize) {
    let mut end = start;
    while end < lines.len() && classes[end].opens_table {
        end += 1;
    }

    let rows = lines[start..end].iter().map(|line| row_of(line)).collect();

    (Node::Table { rows }, end)
}

/// Splits one `|`-bounded line into a row of trimmed cells.
///
/// The first and last characters are treated as the bounding pipes and
/// dropped whatever they are; no check that cell counts line up across
/// rows. A line that is a single `|` degrades to one empty cell.
fn row_of(line: &str) -> Node {
    let cells = strip_bounds(line)
        .split('|')
        .map(|cell| Node::TableElement {
            text: cell.trim().to_string(),
        })
        .collect();

    Node::TableRow { cells }
}

fn strip_bounds(line: &str) -> &str {
    // The leading `|` is one byte; the trailing character may not be.
    let rest = &line[1..];
    match rest.char_indices().next_back() {
        Some((idx, _)) => &rest[..idx],
        None => rest,
    }
}
