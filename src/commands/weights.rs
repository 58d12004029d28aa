//! Weight precomputation command
//!
//! Turns a word list into a weighted vocabulary file, the format embedded at
//! build time.

use crate::wordlists::Vocabulary;
use crate::wordlists::loader::{LoadError, load_from_file, parse_text, write_json, write_weighted};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Recompute weights for every word of `input` against the whole list
///
/// Existing weights in the input are ignored.
///
/// # Errors
///
/// Returns a `LoadError` if the input cannot be read or has no valid words.
pub fn compute_weights(input: &Path) -> Result<Vocabulary, LoadError> {
    let vocabulary = if input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        load_from_file(input)?
    } else {
        let content = fs::read_to_string(input).map_err(|source| LoadError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        parse_text(&content)
    };
    if vocabulary.is_empty() {
        return Err(LoadError::Empty(input.to_path_buf()));
    }

    let reweighted = Vocabulary::from_words(vocabulary.words().cloned().collect());
    info!("Computed weights for {} words", reweighted.len());
    Ok(reweighted)
}

/// Write a weighted vocabulary to `output`, or stdout when absent
///
/// A `.json` output path gets JSON records, anything else `word weight` lines.
///
/// # Errors
///
/// Returns an error if the output cannot be created or written.
pub fn write_weights(vocabulary: &Vocabulary, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                write_json(file, vocabulary)?;
            } else {
                write_weighted(file, vocabulary)?;
            }
            info!("Wrote {} weighted words to {}", vocabulary.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_weighted(&mut lock, vocabulary)?;
            lock.flush()?;
        }
    }
    Ok(())
}
