//! Card materialization: turning raw text plus an import configuration
//! into a card sequence.

use chrono::Utc;
use uuid::Uuid;

use crate::parser::split_line;
use crate::types::{Card, ImportConfig};

/// How many cards the live preview shows.
const PREVIEW_CARDS: usize = 3;

/// Result of a materialization pass.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub cards: Vec<Card>,
    /// Data rows that produced no card (an assigned face came up empty).
    pub skipped_rows: usize,
}

/// Materialize cards from the configuration.
///
/// Pure in everything but card ids: for a fixed configuration, card
/// count, order, and face text are identical across calls. Ids combine a
/// millisecond timestamp, the row position, and a random component; they
/// are unique within one call but not stable across calls, so callers
/// must not correlate preview ids with final-import ids.
pub fn materialize(config: &ImportConfig) -> Outcome {
    let trimmed = config.raw_text.trim();
    if trimmed.is_empty() {
        return Outcome::default();
    }

    let stamp = Utc::now().timestamp_millis();
    let data_lines = trimmed.lines().skip(if config.has_headers { 1 } else { 0 });

    let mut outcome = Outcome::default();
    for (index, line) in data_lines.enumerate() {
        let cells = split_line(line, config.separator);
        let front = face_text(&config.front_columns, &cells);
        let back = face_text(&config.back_columns, &cells);

        if front.is_empty() || back.is_empty() {
            outcome.skipped_rows += 1;
            continue;
        }

        outcome.cards.push(Card {
            id: format!("{}-{}-{}", stamp, index, Uuid::new_v4().simple()),
            front,
            back,
            mastered: None,
        });
    }

    outcome
}

/// Generate the bounded preview for the current configuration.
///
/// Empty whenever either face has no assigned columns, so no partial
/// cards are ever shown. Never mutates anything: a pure projection of the
/// configuration.
pub fn preview(config: &ImportConfig) -> Vec<Card> {
    if config.front_columns.is_empty() || config.back_columns.is_empty() {
        return Vec::new();
    }

    let mut cards = materialize(config).cards;
    cards.truncate(PREVIEW_CARDS);
    cards
}

/// Concatenate the cells of the assigned columns, in assignment order,
/// skipping empties. A column index past the end of a short row reads as
/// an empty string.
fn face_text(columns: &[usize], cells: &[String]) -> String {
    columns
        .iter()
        .map(|&index| cells.get(index).map(String::as_str).unwrap_or(""))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Separator;
    use pretty_assertions::assert_eq;

    fn config(raw_text: &str, separator: Separator, has_headers: bool) -> ImportConfig {
        ImportConfig {
            raw_text: raw_text.to_string(),
            separator,
            has_headers,
            front_columns: vec![0],
            back_columns: vec![1],
        }
    }

    #[test]
    fn end_to_end_with_headers() {
        let config = config("Japanese,English\n犬,dog\n猫,cat\n", Separator::Comma, true);
        let outcome = materialize(&config);

        assert_eq!(outcome.cards.len(), 2);
        assert_eq!(outcome.skipped_rows, 0);
        assert_eq!(outcome.cards[0].front, "犬");
        assert_eq!(outcome.cards[0].back, "dog");
        assert_eq!(outcome.cards[1].front, "猫");
        assert_eq!(outcome.cards[1].back, "cat");
    }

    #[test]
    fn repeated_calls_agree_on_everything_but_ids() {
        let config = config("a,b\nc,d\ne,f\n", Separator::Comma, false);
        let first = materialize(&config);
        let second = materialize(&config);

        assert_eq!(first.cards.len(), second.cards.len());
        for (a, b) in first.cards.iter().zip(second.cards.iter()) {
            assert_eq!(a.front, b.front);
            assert_eq!(a.back, b.back);
        }
    }

    #[test]
    fn ids_are_unique_within_a_call() {
        let config = config("a,b\nc,d\ne,f\n", Separator::Comma, false);
        let cards = materialize(&config).cards;
        let mut ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn row_with_empty_front_is_skipped() {
        // Back content alone never yields a card.
        let config = config(",only back\nx,y\n", Separator::Comma, false);
        let outcome = materialize(&config);

        assert_eq!(outcome.cards.len(), 1);
        assert_eq!(outcome.skipped_rows, 1);
        assert_eq!(outcome.cards[0].front, "x");
    }

    #[test]
    fn same_column_on_both_faces_reuses_the_cell() {
        let config = ImportConfig {
            raw_text: "x;y".to_string(),
            separator: Separator::Semicolon,
            has_headers: false,
            front_columns: vec![0],
            back_columns: vec![0],
        };
        let cards = materialize(&config).cards;

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "x");
        assert_eq!(cards[0].back, "x");
    }

    #[test]
    fn multiple_columns_join_with_newline_in_assignment_order() {
        let config = ImportConfig {
            raw_text: "reading,kanji,meaning\n".to_string(),
            separator: Separator::Comma,
            has_headers: false,
            front_columns: vec![1, 0],
            back_columns: vec![2],
        };
        let cards = materialize(&config).cards;

        assert_eq!(cards[0].front, "kanji\nreading");
        assert_eq!(cards[0].back, "meaning");
    }

    #[test]
    fn short_row_reads_missing_cells_as_empty() {
        let config = ImportConfig {
            raw_text: "a,b,c\nshort\n".to_string(),
            separator: Separator::Comma,
            has_headers: false,
            front_columns: vec![0],
            back_columns: vec![2],
        };
        let outcome = materialize(&config);

        // First row has all three cells, the short row skips silently.
        assert_eq!(outcome.cards.len(), 1);
        assert_eq!(outcome.skipped_rows, 1);
    }

    #[test]
    fn empty_raw_text_yields_nothing() {
        let config = config("", Separator::Comma, false);
        let outcome = materialize(&config);
        assert!(outcome.cards.is_empty());
        assert_eq!(outcome.skipped_rows, 0);
    }

    #[test]
    fn preview_is_empty_without_a_full_assignment() {
        let mut cfg = config("a,b\nc,d\n", Separator::Comma, false);
        cfg.back_columns.clear();
        assert!(preview(&cfg).is_empty());
    }

    #[test]
    fn preview_truncates_to_three_cards() {
        let cfg = config("a,1\nb,2\nc,3\nd,4\ne,5\n", Separator::Comma, false);
        let cards = preview(&cfg);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].front, "c");
    }

    #[test]
    fn empty_cells_drop_out_of_concatenation() {
        let config = ImportConfig {
            raw_text: "word,,extra\n".to_string(),
            separator: Separator::Comma,
            has_headers: false,
            front_columns: vec![0, 1],
            back_columns: vec![2],
        };
        let cards = materialize(&config).cards;

        assert_eq!(cards[0].front, "word");
    }
}
