//! Letter-position facts and feedback categories

use std::fmt;

/// A letter at a position (0-4) of a guess
///
/// Depending on where it is recorded this means either "the letter is in the
/// answer but not here" (misplaced) or "the letter is exactly here" (confirmed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterPosition {
    pub letter: u8,
    pub index: usize,
}

impl LetterPosition {
    #[must_use]
    pub const fn new(letter: u8, index: usize) -> Self {
        Self { letter, index }
    }

    /// The letter as a `char`
    #[must_use]
    pub const fn letter_char(self) -> char {
        self.letter as char
    }
}

/// Shown as `letter@position` with a 1-based position, matching the feedback
/// syntax players type
impl fmt::Display for LetterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter_char(), self.index + 1)
    }
}

/// Which feedback list a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Letter is in the answer, wrong spot (yellow)
    Misplaced,
    /// Letter is in the answer, right spot (green)
    Confirmed,
}

impl Category {
    /// Name used in validation messages about the token list itself
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Misplaced => "misplaced letters",
            Self::Confirmed => "confirmed letters",
        }
    }

    /// The label capitalized, for messages that open with it
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Misplaced => "Misplaced letters",
            Self::Confirmed => "Confirmed letters",
        }
    }

    /// Name used in validation messages about the guessed spot
    #[must_use]
    pub const fn spot(self) -> &'static str {
        match self {
            Self::Misplaced => "used but incorrect",
            Self::Confirmed => "used and correct",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
