//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word as bytes, plus a letter
//! bitmask for constant-time membership tests during filtering.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word cannot contain whitespace")]
    Whitespace,
    #[error("Word cannot contain digits")]
    Digits,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Bit for a lowercase ASCII letter in a 26-bit letter set
#[inline]
pub(crate) const fn letter_bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase());
    1 << (letter - b'a')
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text contains whitespace, digits or other
    /// non-letters, or is not exactly 5 letters long.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Arose").unwrap();
    /// assert_eq!(word.text(), "arose");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace);
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            return Err(WordError::Digits);
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());
        let letters = chars.iter().fold(0, |set, &ch| set | letter_bit(ch));

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }

    /// Set of letters in the word as a 26-bit mask
    #[inline]
    #[must_use]
    pub(crate) const fn letter_set(&self) -> u32 {
        self.letters
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> u32 {
        self.letters.count_ones()
    }

    /// Positions where a letter appears, left to right
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(move |&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
    }

    /// Position of the `occurrence`-th (1-indexed) appearance of `letter`
    #[must_use]
    pub fn nth_position_of(&self, letter: u8, occurrence: usize) -> Option<usize> {
        occurrence
            .checked_sub(1)
            .and_then(|skip| self.positions_of(letter).nth(skip))
    }

    /// How many times a letter appears
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.positions_of(letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new("cranes"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::Digits));
        assert_eq!(Word::new("cra e"), Err(WordError::Whitespace));
        assert_eq!(Word::new("too long"), Err(WordError::Whitespace));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'1'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.positions_of(b's').collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(word.positions_of(b'a').collect::<Vec<_>>(), vec![1]);
        assert_eq!(word.positions_of(b'z').count(), 0);
    }

    #[test]
    fn word_nth_position_of() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.nth_position_of(b'e', 1), Some(2));
        assert_eq!(word.nth_position_of(b'e', 2), Some(3));
        assert_eq!(word.nth_position_of(b'e', 3), None);
        assert_eq!(word.nth_position_of(b'e', 0), None);
        assert_eq!(word.count_of(b'e'), 2);
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("crane").unwrap().distinct_letters(), 5);
        assert_eq!(Word::new("sassy").unwrap().distinct_letters(), 3);
        assert_eq!(Word::new("aaaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
