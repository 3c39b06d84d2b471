//! Dataset document parsing.
//!
//! Revisions of the dataset have stored the card array under either
//! `flashcards` or `cards`; both are accepted, `flashcards` first.

use crate::error::DatasetError;
use crate::normalize::{normalize_all, NormalizeReport};
use serde_json::Value;

const CARD_KEYS: [&str; 2] = ["flashcards", "cards"];

/// Extract the raw card records from a dataset document.
pub fn parse_dataset(content: &str) -> Result<Vec<Value>, DatasetError> {
    let mut document: Value = serde_json::from_str(content)?;

    for key in CARD_KEYS {
        match document.get_mut(key).map(Value::take) {
            Some(Value::Array(records)) => return Ok(records),
            Some(Value::Null) | None => continue,
            Some(_) => return Err(DatasetError::NotAnArray { key }),
        }
    }

    Err(DatasetError::MissingCards)
}

/// Parse a dataset document and normalize every record in it.
pub fn load_cards(content: &str) -> Result<NormalizeReport, DatasetError> {
    let records = parse_dataset(content)?;
    Ok(normalize_all(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_flashcards_key() {
        let records = parse_dataset(r#"{ "flashcards": [{ "word": "huis" }] }"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_cards_key() {
        let records = parse_dataset(r#"{ "cards": [{ "word": "a" }, { "word": "b" }] }"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn flashcards_key_takes_precedence() {
        let records =
            parse_dataset(r#"{ "flashcards": [{ "word": "a" }], "cards": [] }"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn reject_missing_key() {
        let result = parse_dataset(r#"{ "words": [] }"#);
        assert!(matches!(result, Err(DatasetError::MissingCards)));
    }

    #[test]
    fn reject_non_array() {
        let result = parse_dataset(r#"{ "cards": {} }"#);
        assert!(matches!(result, Err(DatasetError::NotAnArray { key: "cards" })));
    }

    #[test]
    fn reject_invalid_json() {
        assert!(matches!(parse_dataset("{"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn load_cards_reports_skipped() {
        let report = load_cards(r#"{ "cards": [{ "word": "huis" }, {}] }"#).unwrap();
        assert_eq!(report.cards.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
    }
}
