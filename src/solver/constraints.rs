//! Constraint store
//!
//! Accumulates what a session has learned about the answer: letters that are
//! absent, letters present but not at a given spot, and letters fixed at a
//! spot. Misplaced and confirmed facts only ever grow.

use crate::core::{GuessFeedback, LetterPosition, WORD_LENGTH, Word, letter_bit};
use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Facts learned across the guesses of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    excluded: FxHashSet<u8>,
    misplaced: Vec<LetterPosition>,
    confirmed: [Option<u8>; WORD_LENGTH],
}

impl ConstraintStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a letter as absent from the answer
    ///
    /// Ignored when the letter is already known to be in the answer, so a
    /// repeated letter with one grey occurrence is never excluded outright.
    /// Anything but a lowercase ASCII letter is ignored too.
    /// Returns whether the store changed.
    pub fn record_excluded(&mut self, letter: u8) -> bool {
        if !is_letter(letter) {
            return false;
        }
        if self.is_known_present(letter) {
            trace!("Not excluding '{}', it is known present", char::from(letter));
            return false;
        }
        self.excluded.insert(letter)
    }

    /// Mark a letter as present but not at `index`
    ///
    /// Ignored when the same letter is already confirmed at `index`, or when
    /// `letter` is not a lowercase ASCII letter. Returns whether the store
    /// changed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a position of a word (0-4).
    pub fn record_misplaced(&mut self, letter: u8, index: usize) -> bool {
        check_index(index);
        if !is_letter(letter) {
            return false;
        }
        let fact = LetterPosition::new(letter, index);
        if self.confirmed[index] == Some(letter) || self.misplaced.contains(&fact) {
            return false;
        }
        self.excluded.remove(&letter);
        self.misplaced.push(fact);
        true
    }

    /// Fix a letter at `index`
    ///
    /// A different letter already at `index` is overwritten. Anything but a
    /// lowercase ASCII letter is ignored. Returns whether the store changed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a position of a word (0-4).
    pub fn record_confirmed(&mut self, letter: u8, index: usize) -> bool {
        check_index(index);
        if !is_letter(letter) {
            return false;
        }
        match self.confirmed[index] {
            Some(existing) if existing == letter => return false,
            Some(existing) => debug!(
                "Position {index} changes from '{}' to '{}'",
                char::from(existing),
                char::from(letter)
            ),
            None => {}
        }
        self.excluded.remove(&letter);
        self.confirmed[index] = Some(letter);
        true
    }

    /// Record every letter of a parsed guess
    ///
    /// Confirmed facts go first, then misplaced ones, and only then are the
    /// remaining letters excluded, so the order of letters in the guess never
    /// decides whether a repeated letter gets excluded.
    pub fn apply(&mut self, feedback: &GuessFeedback) {
        for fact in feedback.confirmed.facts() {
            self.record_confirmed(fact.letter, fact.index);
        }
        for fact in feedback.misplaced.facts() {
            if !feedback.confirmed.contains(*fact) {
                self.record_misplaced(fact.letter, fact.index);
            }
        }
        for (index, &letter) in feedback.guess.chars().iter().enumerate() {
            let fact = LetterPosition::new(letter, index);
            if !feedback.confirmed.contains(fact) && !feedback.misplaced.contains(fact) {
                self.record_excluded(letter);
            }
        }
    }

    /// Whether the letter is confirmed or misplaced anywhere
    #[must_use]
    pub fn is_known_present(&self, letter: u8) -> bool {
        self.confirmed.contains(&Some(letter)) || self.misplaced.iter().any(|f| f.letter == letter)
    }

    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        self.excluded.contains(&letter)
    }

    /// Excluded letters in alphabetical order
    #[must_use]
    pub fn excluded_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.excluded.iter().map(|&b| char::from(b)).collect();
        letters.sort_unstable();
        letters
    }

    /// Excluded letters as a 26-bit mask
    #[must_use]
    pub(crate) fn excluded_mask(&self) -> u32 {
        self.excluded.iter().fold(0, |mask, &b| mask | letter_bit(b))
    }

    /// Misplaced facts in the order they were learned
    #[must_use]
    pub fn misplaced(&self) -> &[LetterPosition] {
        &self.misplaced
    }

    /// Confirmed letter for each position
    #[must_use]
    pub const fn confirmed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.confirmed
    }

    #[must_use]
    pub fn is_fully_confirmed(&self) -> bool {
        self.confirmed.iter().all(Option::is_some)
    }

    /// The answer spelled out by confirmed letters, once every position is known
    #[must_use]
    pub fn confirmed_word(&self) -> Option<Word> {
        let letters: Option<String> = self.confirmed.iter().map(|c| c.map(char::from)).collect();
        letters.and_then(|text| Word::new(text).ok())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
            && self.misplaced.is_empty()
            && self.confirmed.iter().all(Option::is_none)
    }
}

fn is_letter(letter: u8) -> bool {
    if letter.is_ascii_lowercase() {
        true
    } else {
        trace!("Ignoring non-letter byte {letter:#04x}");
        false
    }
}

fn check_index(index: usize) {
    assert!(
        index < WORD_LENGTH,
        "position {index} is outside a {WORD_LENGTH}-letter word"
    );
}
