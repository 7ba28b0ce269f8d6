//! Structural analysis of raw import text: separator detection and
//! column discovery.

use crate::error::{ImportError, Result};
use crate::parser::split_line;
use crate::types::{Column, Separator};

/// How many leading lines feed the sample collection pass.
const SAMPLE_LINES: usize = 6;

/// How many sample values each column keeps for preview display.
const SAMPLES_PER_COLUMN: usize = 3;

/// Infer the separator by counting candidates on the first line only.
///
/// Tab wins when it strictly exceeds both others, semicolon when it
/// strictly exceeds comma. Ties favor comma.
pub fn detect_separator(content: &str) -> Separator {
    let first_line = content.lines().next().unwrap_or("");
    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();
    let tabs = first_line.matches('\t').count();

    if tabs > commas && tabs > semicolons {
        Separator::Tab
    } else if semicolons > commas {
        Separator::Semicolon
    } else {
        Separator::Comma
    }
}

/// Discover the columns of the raw text for a given separator and header
/// flag.
///
/// Row 0 supplies column names when headers are enabled, with a
/// `Column N` (1-based) fallback for blank headers; without headers every
/// column is named `Column N`. Samples come from the first few lines
/// only, capped regardless of total size. Deterministic for identical
/// input, separator, and header flag.
pub fn analyze(content: &str, separator: Separator, has_headers: bool) -> Result<Vec<Column>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    let first_line = split_line(lines[0], separator);

    let data_start = if has_headers { 1 } else { 0 };
    let data_end = lines.len().min(SAMPLE_LINES);
    let sample_rows: Vec<Vec<String>> = lines[data_start.min(data_end)..data_end]
        .iter()
        .map(|line| split_line(line, separator))
        .collect();

    let columns = (0..first_line.len())
        .map(|index| {
            let header = if has_headers && !first_line[index].is_empty() {
                first_line[index].clone()
            } else {
                format!("Column {}", index + 1)
            };

            let sample_values = sample_rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
                .filter(|value| !value.is_empty())
                .take(SAMPLES_PER_COLUMN)
                .map(str::to_string)
                .collect();

            Column {
                index,
                header,
                sample_values,
            }
        })
        .collect();

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_comma_by_default() {
        assert_eq!(detect_separator("a,b,c"), Separator::Comma);
        assert_eq!(detect_separator("no separators at all"), Separator::Comma);
    }

    #[test]
    fn semicolons_beat_commas() {
        assert_eq!(detect_separator("a;b;c;d,e"), Separator::Semicolon);
    }

    #[test]
    fn tabs_beat_both() {
        assert_eq!(detect_separator("a\tb\tc,d;e"), Separator::Tab);
    }

    #[test]
    fn ties_favor_comma() {
        assert_eq!(detect_separator("a,b;c"), Separator::Comma);
        assert_eq!(detect_separator("a\tb,c"), Separator::Comma);
    }

    #[test]
    fn only_first_line_counts() {
        assert_eq!(detect_separator("a,b\nx;y;z;w\n"), Separator::Comma);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            analyze("   \n  ", Separator::Comma, true),
            Err(ImportError::EmptyInput)
        );
    }

    #[test]
    fn headers_name_the_columns() {
        let columns = analyze("Japanese,English\n犬,dog\n", Separator::Comma, true).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header, "Japanese");
        assert_eq!(columns[1].header, "English");
        assert_eq!(columns[0].sample_values, vec!["犬"]);
        assert_eq!(columns[1].sample_values, vec!["dog"]);
    }

    #[test]
    fn blank_header_falls_back_to_column_n() {
        let columns = analyze("Japanese,\n犬,dog\n", Separator::Comma, true).unwrap();
        assert_eq!(columns[1].header, "Column 2");
    }

    #[test]
    fn without_headers_all_columns_are_numbered() {
        let columns = analyze("犬,dog\n猫,cat\n", Separator::Comma, false).unwrap();
        assert_eq!(columns[0].header, "Column 1");
        assert_eq!(columns[1].header, "Column 2");
        // Row 0 is data too.
        assert_eq!(columns[0].sample_values, vec!["犬", "猫"]);
    }

    #[test]
    fn samples_cap_at_three_non_empty_values() {
        let content = "h\na\n\nb\nc\nd\ne\nf\n";
        let columns = analyze(content, Separator::Comma, true).unwrap();
        // Only the first few lines feed sampling, blanks filtered.
        assert_eq!(columns[0].sample_values, vec!["a", "b", "c"]);
    }

    #[test]
    fn short_rows_leave_samples_empty() {
        let columns = analyze("a,b,c\nx\ny\n", Separator::Comma, true).unwrap();
        assert_eq!(columns.len(), 3);
        assert!(columns[2].sample_values.is_empty());
    }
}
