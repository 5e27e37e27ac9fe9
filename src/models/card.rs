//! Card data structures
//!
//! Cards are loaded from a JSON array of `{"q": ..., "a": ...}` objects.
//! Loading is lenient about individual entries and strict about the result:
//! malformed entries are skipped, but a file with no usable pair is an error.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Unable to load {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains no valid {{q, a}} pair", .0.display())]
    NoValidPairs(PathBuf),
}

pub type Result<T> = std::result::Result<T, DataError>;

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

impl Card {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Load and clean the card list from a JSON data file
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let cards = clean_cards(&value);
    if cards.is_empty() {
        return Err(DataError::NoValidPairs(path.to_path_buf()));
    }

    log::info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Keep entries whose `q` and `a` are non-blank strings, trimmed.
/// A top level that is not an array yields no cards.
fn clean_cards(value: &serde_json::Value) -> Vec<Card> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let question = entry.get("q")?.as_str()?.trim();
            let answer = entry.get("a")?.as_str()?.trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            Some(Card::new(question, answer))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_data_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_load_cards_success() {
        let json = r#"[
            {"q": "C E", "a": "Major third"},
            {"q": "3 × 4", "a": "12"}
        ]"#;
        let (_file, path) = create_temp_data_file(json);

        let cards = load_cards(&path).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], Card::new("C E", "Major third"));
        assert_eq!(cards[1].question, "3 × 4");
        assert_eq!(cards[1].answer, "12");
    }

    #[test]
    fn test_load_cards_trims_and_filters() {
        let json = r#"[
            {"q": "  D  ", "a": "\tF#\n"},
            {"q": "   ", "a": "blank question"},
            {"q": "no answer"},
            {"q": 1, "a": "number question"},
            {"q": "null answer", "a": null},
            "just a string",
            null,
            {"q": "E", "a": "G#", "extra": true}
        ]"#;
        let (_file, path) = create_temp_data_file(json);

        let cards = load_cards(&path).unwrap();
        assert_eq!(cards, vec![Card::new("D", "F#"), Card::new("E", "G#")]);
    }

    #[test]
    fn test_load_cards_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/data.json");
        let err = load_cards(&path).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
        assert!(err.to_string().starts_with("Unable to load"));
    }

    #[test]
    fn test_load_cards_invalid_json() {
        let (_file, path) = create_temp_data_file("[{ invalid json ");
        let err = load_cards(&path).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[test]
    fn test_load_cards_not_an_array() {
        let (_file, path) = create_temp_data_file(r#"{"q": "C", "a": "D"}"#);
        let err = load_cards(&path).unwrap_err();
        assert!(matches!(err, DataError::NoValidPairs(_)));
    }

    #[test]
    fn test_load_cards_empty_array() {
        let (_file, path) = create_temp_data_file("[]");
        let err = load_cards(&path).unwrap_err();
        assert!(err.to_string().contains("contains no valid {q, a} pair"));
    }
}
