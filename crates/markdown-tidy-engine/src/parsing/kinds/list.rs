use super::super::classify::LineClass;
use crate::tree::Node;

/// Spaces substituted for one literal tab before indentation is measured.
pub const TAB_WIDTH: usize = 4;

/// Consumes a contiguous run of list-marker lines starting at `start`.
///
/// Returns the list node and the index of the first line past the run.
/// The caller appends the `ListEnd` sentinel.
pub fn consume_run(lines: &[&str], classes: &[LineClass], start: usize) -> (Node, usize) {
    let mut end = start;
    while end < lines.len() && classes[end].opens_list {
        end += 1;
    }

    let elements = lines[start..end].iter().map(|line| element_of(line)).collect();

    (Node::List { elements }, end)
}

/// Derives one list element from a single marker line.
///
/// Level comes from indentation width alone: `w` characters before the
/// first `-` (tabs expanded) give level `w / 2 + 1`. Levels carry no
/// continuity requirement, so siblings may jump arbitrarily.
fn element_of(line: &str) -> Node {
    let expanded = line.replace('\t', &" ".repeat(TAB_WIDTH));

    let width = expanded.chars().take_while(|&c| c != '-').count();
    let level = width / 2 + 1;

    // Strip the marker, not interior dashes: left-trim, drop the leading
    // dash run, trim again.
    let text = expanded
        .trim()
        .trim_start_matches('-')
        .trim()
        .to_string();

    Node::ListElement { level, text }
}
