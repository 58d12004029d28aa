//! Vocabulary for the solver
//!
//! A vocabulary is an immutable, shared list of candidate words with a static
//! weight each. Sessions clone the list once and narrow their own copy.

mod embedded;
pub mod loader;

use crate::core::Word;
use crate::solver::precompute_weights;
use std::sync::Arc;

pub use embedded::{WEIGHTED_WORDS, WEIGHTED_WORDS_COUNT};

/// A word and its current weight
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: Word,
    pub weight: f64,
}

impl Candidate {
    #[must_use]
    pub const fn new(word: Word, weight: f64) -> Self {
        Self { word, weight }
    }
}

/// Immutable list of weighted candidate words, heaviest first
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Arc<[Candidate]>,
}

impl Vocabulary {
    /// Build a vocabulary from weighted entries
    ///
    /// Entries are ordered by weight, heaviest first. Equal weights keep their
    /// input order.
    #[must_use]
    pub fn new(mut entries: Vec<Candidate>) -> Self {
        entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Self {
            entries: entries.into(),
        }
    }

    /// Build a vocabulary from bare words, weighting them by letter frequency
    /// across the whole list
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self::new(precompute_weights(words))
    }

    /// The built-in vocabulary
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// assert_eq!(vocabulary.entries()[0].word.text(), "arose");
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let entries = WEIGHTED_WORDS
            .iter()
            .filter_map(|&(text, weight)| Word::new(text).ok().map(|w| Candidate::new(w, weight)))
            .collect();
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|c| &c.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::embedded()
    }
}
