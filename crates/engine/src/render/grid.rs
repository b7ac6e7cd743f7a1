use lister_fs::FileRecord;

use super::width::{display_width, pad_to};

/// Largest column count whose `max_width + 1` cells fit in `console_width`.
///
/// At least one column even when a single name is wider than the console,
/// never more columns than entries, zero for an empty list.
pub fn column_count(max_width: usize, entries: usize, console_width: usize) -> usize {
    if entries == 0 {
        return 0;
    }
    (console_width / (max_width + 1)).clamp(1, entries)
}

/// Column-major grid of names: row `r`, column `c` holds entry `r + rows * c`.
///
/// Cells are padded to the widest name and joined by a single space; the
/// last cell of each row is left unpadded.
pub fn render_grid(records: &[FileRecord], console_width: usize) -> String {
    let max_width = records
        .iter()
        .map(|r| display_width(&r.name))
        .max()
        .unwrap_or(0);

    let columns = column_count(max_width, records.len(), console_width);
    if columns == 0 {
        return String::new();
    }
    let rows = records.len().div_ceil(columns);

    let mut out = String::new();
    for row in 0..rows {
        let cells: Vec<&str> = (0..columns)
            .filter_map(|col| records.get(row + rows * col))
            .map(|r| r.name.as_str())
            .collect();

        let last = cells.len().saturating_sub(1);
        for (i, name) in cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if i == last {
                out.push_str(name);
            } else {
                out.push_str(&pad_to(name, max_width));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
