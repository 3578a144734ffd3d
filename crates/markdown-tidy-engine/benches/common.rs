// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content\nwrapped onto a second line.\n\n- Bullet point\n  - Nested item\n- Another item\n\n| name | qty | note |\n| --- | --- | --- |\n| bolt | 12 | spare |\n| washer | 100 | |\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_wide_table(rows: usize, cols: usize) -> String {
    let mut content = String::new();

    for row in 0..rows {
        content.push('|');
        for col in 0..cols {
            content.push_str(&format!(" cell {row}x{col} |"));
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_deep_list(items: usize, max_level: usize) -> String {
    let mut content = String::new();

    for item in 0..items {
        let indent = "  ".repeat(item % max_level);
        content.push_str(&format!("{indent}- item {item}\n"));
    }

    content
}
