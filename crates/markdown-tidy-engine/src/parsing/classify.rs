/// Local facts about a single line, computed without surrounding context.
///
/// This is phase 1 of parsing: every line is classified independently;
/// the cursor phase decides what the facts mean in sequence.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Whitespace-only or empty line.
    pub is_blank: bool,
    /// First character is `#`.
    pub opens_heading: bool,
    /// First non-whitespace character is `-`.
    pub opens_list: bool,
    /// First character is `|`. Indented tables are not recognized.
    pub opens_table: bool,
    /// `-` at column zero, before any trimming. Paragraph continuation
    /// checks this rather than `opens_list`.
    pub dash_at_start: bool,
}

impl LineClass {
    pub fn of(line: &str) -> Self {
        Self {
            is_blank: line.trim().is_empty(),
            opens_heading: line.starts_with('#'),
            opens_list: line.trim_start().starts_with('-'),
            opens_table: line.starts_with('|'),
            dash_at_start: line.starts_with('-'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(LineClass::of("").is_blank);
        assert!(LineClass::of("   \t ").is_blank);
        assert!(!LineClass::of(" x ").is_blank);
    }

    #[test]
    fn heading_requires_column_zero_hash() {
        assert!(LineClass::of("# Title").opens_heading);
        assert!(LineClass::of("#Title").opens_heading);
        assert!(!LineClass::of(" # Title").opens_heading);
    }

    #[test]
    fn list_marker_tolerates_indentation() {
        assert!(LineClass::of("- item").opens_list);
        assert!(LineClass::of("    - item").opens_list);
        assert!(LineClass::of("\t- item").opens_list);
        assert!(!LineClass::of("item - with dash").opens_list);
    }

    #[test]
    fn table_marker_requires_column_zero_pipe() {
        assert!(LineClass::of("| a | b |").opens_table);
        assert!(!LineClass::of("  | a | b |").opens_table);
    }

    #[test]
    fn column_zero_dash_is_tracked_separately() {
        let indented = LineClass::of("  - item");
        assert!(indented.opens_list);
        assert!(!indented.dash_at_start);

        let flush = LineClass::of("- item");
        assert!(flush.opens_list);
        assert!(flush.dash_at_start);
    }
}
