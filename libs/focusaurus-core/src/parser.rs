//! Line parser for delimited import text.
//!
//! # Format
//! ```text
//! Japanese,English
//! 犬,dog
//! "こんにちは, 世界",hello world
//! ```

use crate::types::Separator;

/// Split one line into cells on a separator, honoring double quotes.
///
/// A single left-to-right scan keeps an "inside quotes" flag that toggles
/// on every `"` encountered; quote characters are consumed by the toggle
/// and never land in the cell. Doubled quotes are two toggles, not an
/// escape, and an unmatched trailing quote simply ends the line in
/// whatever state holds. Empty cells are preserved so column positions
/// stay aligned across rows.
pub fn split_line(line: &str, separator: Separator) -> Vec<String> {
    let boundary = separator.as_char();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            inside_quotes = !inside_quotes;
        } else if ch == boundary && !inside_quotes {
            cells.push(finish_cell(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    cells.push(finish_cell(&current));

    cells
}

fn finish_cell(raw: &str) -> String {
    strip_outer_quotes(raw.trim()).to_string()
}

// One leading and one trailing quote at most, stripped whether or not
// quoting was balanced.
fn strip_outer_quotes(cell: &str) -> &str {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}
