use crate::tree::Node;

/// Re-derives alignment for one table from its raw rows.
///
/// Column widths are computed from the data rows only; separator rows in
/// the source are dropped and a fresh separator is synthesized after the
/// first data row whenever more than one remains. Short rows are padded
/// with empty cells out to the widest row.
pub(super) fn render(out: &mut String, rows: &[Node]) {
    let rows = collect_cells(rows);
    if rows.is_empty() {
        return;
    }

    let max_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    if max_cols == 0 {
        return;
    }

    let data_rows: Vec<&Vec<&str>> = rows.iter().filter(|row| !is_separator_row(row)).collect();

    let mut widths = vec![0usize; max_cols];
    for row in &data_rows {
        for (i, cell) in row.iter().take(max_cols).enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    for (row_idx, row) in data_rows.iter().enumerate() {
        out.push('|');
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).copied().unwrap_or("");
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.len()));
            out.push_str(" |");
        }
        out.push('\n');

        if row_idx == 0 && data_rows.len() > 1 {
            out.push('|');
            for width in &widths {
                out.push(' ');
                out.push_str(&"-".repeat(*width));
                out.push_str(" |");
            }
            out.push('\n');
        }
    }

    out.push('\n');
}

/// A separator row consists solely of dashes, colons, and spaces once
/// each cell is trimmed. An empty row is not a separator.
fn is_separator_row(row: &[&str]) -> bool {
    if row.is_empty() {
        return false;
    }

    row.iter()
        .all(|cell| cell.trim().chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

fn collect_cells(rows: &[Node]) -> Vec<Vec<&str>> {
    rows.iter()
        .filter_map(|row| match row {
            Node::TableRow { cells } => Some(
                cells
                    .iter()
                    .filter_map(|cell| match cell {
                        Node::TableElement { text } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
        .collect()
}
