//! Candidate scoring
//!
//! Defines the Scorer trait and the letter-frequency heuristic.
//!
//! The frequency weight of a word is the sum, over each letter it contains,
//! of that letter's share of all letters in the pool, scaled by
//! `e^(distinct letters)`. Common letters score high, and words that spend
//! their five slots on five different letters score much higher than words
//! with repeats.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::Candidate;

/// Ranks a candidate pool, best suggestion first
pub trait Scorer {
    /// Re-weight and sort the pool in place
    ///
    /// Sorting must be stable so equal weights keep their current order.
    fn rank(&self, candidates: &mut [Candidate]);
}

/// Letter-frequency and diversity heuristic, recomputed from the current pool
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl Scorer for FrequencyScorer {
    fn rank(&self, candidates: &mut [Candidate]) {
        let frequencies = letter_frequencies(candidates.iter().map(|c| &c.word));
        let total_letters = candidates.len() * WORD_LENGTH;
        for candidate in candidates.iter_mut() {
            candidate.weight = frequency_weight(&candidate.word, &frequencies, total_letters);
        }
        sort_by_weight(candidates);
    }
}

/// Keeps the vocabulary's precomputed weights
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticScorer;

impl Scorer for StaticScorer {
    fn rank(&self, candidates: &mut [Candidate]) {
        sort_by_weight(candidates);
    }
}

/// Enum wrapper for runtime scorer selection
#[derive(Debug, Clone, Copy)]
pub enum ScorerType {
    /// Re-score from the surviving pool each round (default)
    Frequency(FrequencyScorer),
    /// Keep static vocabulary weights
    Static(StaticScorer),
}

impl Scorer for ScorerType {
    fn rank(&self, candidates: &mut [Candidate]) {
        match self {
            Self::Frequency(s) => s.rank(candidates),
            Self::Static(s) => s.rank(candidates),
        }
    }
}

impl ScorerType {
    /// Create a scorer from its name
    ///
    /// Supported names: "frequency", "static". Defaults to frequency if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "static" => Self::Static(StaticScorer),
            _ => Self::Frequency(FrequencyScorer),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Static(_) => "static",
        }
    }
}

impl Default for ScorerType {
    fn default() -> Self {
        Self::Frequency(FrequencyScorer)
    }
}

/// Count of each letter across a set of words
pub fn letter_frequencies<'a>(words: impl IntoIterator<Item = &'a Word>) -> [u32; 26] {
    let mut counts = [0u32; 26];
    for word in words {
        for &ch in word.chars() {
            counts[usize::from(ch - b'a')] += 1;
        }
    }
    counts
}

/// Weight of one word given pool letter counts
///
/// Letter shares are summed as integer counts before dividing, so anagrams
/// and words with the same multiset of shares tie exactly.
#[must_use]
pub fn frequency_weight(word: &Word, frequencies: &[u32; 26], total_letters: usize) -> f64 {
    if total_letters == 0 {
        return 0.0;
    }
    let letter_sum: u32 = word
        .chars()
        .iter()
        .map(|&ch| frequencies[usize::from(ch - b'a')])
        .sum();
    f64::from(letter_sum) / total_letters as f64 * f64::from(word.distinct_letters()).exp()
}

/// Weight a whole word list against itself, heaviest first
///
/// This is the precomputation behind the embedded vocabulary.
#[must_use]
pub fn precompute_weights(words: Vec<Word>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = words.into_iter().map(|w| Candidate::new(w, 0.0)).collect();
    FrequencyScorer.rank(&mut candidates);
    candidates
}

fn sort_by_weight(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Candidate> {
        words
            .iter()
            .map(|w| Candidate::new(Word::new(*w).unwrap(), 0.0))
            .collect()
    }

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.text()).collect()
    }

    #[test]
    fn letter_frequencies_counts_every_occurrence() {
        let words = pool(&["gross", "nobby"]);
        let counts = letter_frequencies(words.iter().map(|c| &c.word));
        assert_eq!(counts[usize::from(b's' - b'a')], 2);
        assert_eq!(counts[usize::from(b'o' - b'a')], 2);
        assert_eq!(counts[usize::from(b'b' - b'a')], 2);
        assert_eq!(counts.iter().sum::<u32>(), 10);
    }

    #[test]
    fn frequency_weight_matches_formula() {
        let words = pool(&["gross", "nobby"]);
        let counts = letter_frequencies(words.iter().map(|c| &c.word));
        // g1 r1 o2 s2 s2 over 10 letters, 4 distinct letters
        let expected = 8.0 / 10.0 * 4f64.exp();
        let weight = frequency_weight(&words[0].word, &counts, 10);
        assert!((weight - expected).abs() < 1e-9);
    }

    #[test]
    fn diverse_words_outrank_repeats() {
        let mut candidates = pool(&["sassy", "salty"]);
        FrequencyScorer.rank(&mut candidates);
        assert_eq!(texts(&candidates), vec!["salty", "sassy"]);
    }

    #[test]
    fn ties_keep_pool_order() {
        let mut candidates = pool(&["gross", "nobby"]);
        FrequencyScorer.rank(&mut candidates);
        assert_eq!(texts(&candidates), vec!["gross", "nobby"]);
        assert_eq!(candidates[0].weight, candidates[1].weight);

        let mut candidates = pool(&["nobby", "gross"]);
        FrequencyScorer.rank(&mut candidates);
        assert_eq!(texts(&candidates), vec!["nobby", "gross"]);
    }

    #[test]
    fn weights_follow_current_pool() {
        let mut candidates = pool(&["crane", "slate", "nobby"]);
        FrequencyScorer.rank(&mut candidates);
        let first = candidates.iter().find(|c| c.word.text() == "crane").unwrap().weight;

        let mut narrowed = pool(&["crane", "nobby"]);
        FrequencyScorer.rank(&mut narrowed);
        let second = narrowed.iter().find(|c| c.word.text() == "crane").unwrap().weight;

        assert!((first - second).abs() > 1e-9);
    }

    #[test]
    fn static_scorer_keeps_weights() {
        let mut candidates = vec![
            Candidate::new(Word::new("gross").unwrap(), 1.5),
            Candidate::new(Word::new("hello").unwrap(), 3.0),
        ];
        StaticScorer.rank(&mut candidates);
        assert_eq!(texts(&candidates), vec!["hello", "gross"]);
        assert!((candidates[0].weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pool_is_fine() {
        let mut candidates: Vec<Candidate> = Vec::new();
        FrequencyScorer.rank(&mut candidates);
        assert!(candidates.is_empty());
        assert!(precompute_weights(Vec::new()).is_empty());
    }

    #[test]
    fn scorer_type_from_name() {
        assert_eq!(ScorerType::from_name("static").name(), "static");
        assert_eq!(ScorerType::from_name("frequency").name(), "frequency");
        assert_eq!(ScorerType::from_name("unknown").name(), "frequency");
    }
}
