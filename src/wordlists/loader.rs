//! Vocabulary loading utilities
//!
//! Three formats are understood:
//! - a plain word list, one word per line (weights are computed),
//! - `word weight` lines, as written by [`write_weighted`],
//! - JSON: `[{"word": "arose", "weight": 62.2}, ...]` (any path ending in `.json`).

use super::{Candidate, Vocabulary};
use crate::core::Word;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a vocabulary file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON vocabulary")]
    Json(#[from] serde_json::Error),

    #[error("word list {} contains no valid words", .0.display())]
    Empty(PathBuf),
}

/// One record of a JSON vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry {
    pub word: String,
    pub weight: f64,
}

/// Load a vocabulary from a file
///
/// Invalid words are skipped with a warning.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read, is malformed JSON, or
/// holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let vocabulary = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)
    };

    if vocabulary.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    info!("Loaded {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parse a plain or `word weight` text list
///
/// When any line lacks a weight, weights for the whole list are recomputed.
#[must_use]
pub fn parse_text(content: &str) -> Vocabulary {
    let mut entries: Vec<(Word, Option<f64>)> = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(text) = parts.next() else {
            continue;
        };
        let word = match Word::new(text) {
            Ok(word) => word,
            Err(e) => {
                warn!("Skipping line {}: '{text}': {e}", number + 1);
                continue;
            }
        };
        let weight = parts.next().and_then(|w| w.parse::<f64>().ok());
        entries.push((word, weight));
    }

    if entries.iter().all(|(_, weight)| weight.is_some()) {
        let candidates = entries
            .into_iter()
            .filter_map(|(word, weight)| weight.map(|w| Candidate::new(word, w)))
            .collect();
        Vocabulary::new(candidates)
    } else {
        debug!("Word list has unweighted lines, computing weights");
        Vocabulary::from_words(entries.into_iter().map(|(word, _)| word).collect())
    }
}

/// Parse a JSON vocabulary
///
/// # Errors
///
/// Returns `LoadError::Json` if the content is not an array of
/// `{word, weight}` records.
pub fn parse_json(content: &str) -> Result<Vocabulary, LoadError> {
    let records: Vec<WeightedEntry> = serde_json::from_str(content)?;
    let candidates = records
        .into_iter()
        .filter_map(|record| match Word::new(record.word.as_str()) {
            Ok(word) => Some(Candidate::new(word, record.weight)),
            Err(e) => {
                warn!("Skipping '{}': {e}", record.word);
                None
            }
        })
        .collect();
    Ok(Vocabulary::new(candidates))
}

/// Write a vocabulary as `word weight` lines, heaviest first
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_weighted<W: Write>(mut out: W, vocabulary: &Vocabulary) -> io::Result<()> {
    for candidate in vocabulary.entries() {
        writeln!(out, "{} {:.6}", candidate.word, candidate.weight)?;
    }
    out.flush()
}

/// Write a vocabulary as a JSON array of `{word, weight}` records
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(out: W, vocabulary: &Vocabulary) -> Result<(), LoadError> {
    let records: Vec<WeightedEntry> = vocabulary
        .entries()
        .iter()
        .map(|c| WeightedEntry {
            word: c.word.text().to_string(),
            weight: c.weight,
        })
        .collect();
    serde_json::to_writer(out, &records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_plain_list_computes_weights() {
        let vocabulary = parse_text("crane\nslate\n\nirate\n");
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.entries().iter().all(|c| c.weight > 0.0));
    }

    #[test]
    fn parse_text_keeps_given_weights() {
        let vocabulary = parse_text("gross 1.5\nhello 3\nnobby 1.12\n");
        let order: Vec<&str> = vocabulary.words().map(Word::text).collect();
        assert_eq!(order, vec!["hello", "gross", "nobby"]);
        assert!((vocabulary.entries()[0].weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_text_skips_invalid() {
        let vocabulary = parse_text("crane\ntoolong\nabc\nsl4te\nslate\n");
        let order: Vec<&str> = vocabulary.words().map(Word::text).collect();
        assert_eq!(order.len(), 2);
        assert!(order.contains(&"crane"));
        assert!(order.contains(&"slate"));
    }

    #[test]
    fn parse_json_records() {
        let json = r#"[{"word":"hello","weight":3},{"word":"gross","weight":1.5},{"word":"nobby","weight":1.12}]"#;
        let vocabulary = parse_json(json).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.entries()[0].word.text(), "hello");
    }

    #[test]
    fn parse_json_rejects_garbage() {
        assert!(matches!(parse_json("{not json"), Err(LoadError::Json(_))));
    }

    #[test]
    fn weighted_text_round_trip_preserves_order() {
        let vocabulary = parse_text("hello 3\ngross 1.5\nnobby 1.12\n");
        let mut buffer = Vec::new();
        write_weighted(&mut buffer, &vocabulary).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().next(), Some("hello 3.000000"));
        let reloaded = parse_text(&text);
        assert_eq!(reloaded.entries(), vocabulary.entries());
    }

    #[test]
    fn load_from_file_missing_path() {
        let path = std::env::temp_dir().join("wordle_assist_missing_list.txt");
        let _ = fs::remove_file(&path);
        assert!(matches!(load_from_file(&path), Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_json_and_empty() {
        let dir = std::env::temp_dir();

        let json_path = dir.join("wordle_assist_loader_test.json");
        fs::write(&json_path, r#"[{"word":"arose","weight":2.0}]"#).unwrap();
        let vocabulary = load_from_file(&json_path).unwrap();
        assert_eq!(vocabulary.entries()[0].word.text(), "arose");
        let _ = fs::remove_file(&json_path);

        let empty_path = dir.join("wordle_assist_loader_empty.txt");
        fs::write(&empty_path, "abc\n").unwrap();
        assert!(matches!(load_from_file(&empty_path), Err(LoadError::Empty(_))));
        let _ = fs::remove_file(&empty_path);
    }
}
