use crate::tree::Node;

/// Parses one `#`-prefixed line into a heading node.
///
/// Level is the length of the leading `#` run, unclamped. The text starts
/// one character past the run whether or not that character is a space, so
/// `# Foo` keeps `Foo` while `#Foo` keeps `oo`. A line consisting solely
/// of `#` characters keeps the whole line as its text.
pub fn parse_line(line: &str) -> Node {
    let mut level = 0;
    let mut text_start = 0;
    for (idx, ch) in line.char_indices() {
        if ch != '#' {
            text_start = idx + ch.len_utf8();
            break;
        }
        level += 1;
    }

    Node::Heading {
        level,
        text: line[text_start..].to_string(),
    }
}
