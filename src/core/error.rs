//! Validation errors for guess feedback
//!
//! Every variant is recoverable: the caller re-collects input and resubmits.
//! The `Display` text is the message shown to the player.

use super::Category;
use super::word::WordError;
use thiserror::Error;

/// Malformed or inconsistent guess feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Guess cannot contain any kind of space.")]
    GuessWhitespace,

    #[error("Guess cannot contain numbers.")]
    GuessDigits,

    #[error("Guess can only contain letters.")]
    GuessNotLetters,

    #[error("Guess must be 5 letters.")]
    GuessLength,

    #[error("{} cannot contain numbers unless to specify which of a same letter.", .0.title())]
    StrayDigits(Category),

    #[error("'all' can only be used for confirmed letters.")]
    AllNotAllowed,

    #[error("{0} is not a letter. Make sure to put spaces between letters.")]
    NotALetter(String),

    #[error(
        "Guess does not contain {} {} in {} spot.",
        noun(.letters.len(), "letter", "letters"),
        join(.letters),
        .category.spot()
    )]
    LettersNotInGuess {
        category: Category,
        letters: Vec<char>,
    },

    #[error(
        "Guess does not contain {} {}.",
        noun(.0.len(), "occurrence", "occurrences"),
        .0.join(",")
    )]
    OccurrenceOutOfRange(Vec<String>),

    #[error(
        "You used {} {} multiple times in {} and did not specify the occurrence. Please make sure to specify (ie s1 s2).",
        noun(.letters.len(), "letter", "letters"),
        join(.letters),
        .category
    )]
    RepeatedLetter {
        category: Category,
        letters: Vec<char>,
    },

    #[error(
        "You used {} {} as both misplaced and confirmed at the same spot. Please make sure to specify (ie s1 s2).",
        noun(.0.len(), "letter", "letters"),
        join(.0)
    )]
    ConflictingCategories(Vec<char>),
}

impl From<WordError> for ValidationError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::Whitespace => Self::GuessWhitespace,
            WordError::Digits => Self::GuessDigits,
            WordError::NonAscii | WordError::InvalidCharacters => Self::GuessNotLetters,
            WordError::InvalidLength(_) => Self::GuessLength,
        }
    }
}

const fn noun(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn join(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_not_in_guess_singular() {
        let err = ValidationError::LettersNotInGuess {
            category: Category::Misplaced,
            letters: vec!['l'],
        };
        assert_eq!(
            err.to_string(),
            "Guess does not contain letter l in used but incorrect spot."
        );
    }

    #[test]
    fn letters_not_in_guess_plural() {
        let err = ValidationError::LettersNotInGuess {
            category: Category::Confirmed,
            letters: vec!['l', 'o'],
        };
        assert_eq!(
            err.to_string(),
            "Guess does not contain letters l,o in used and correct spot."
        );
    }

    #[test]
    fn stray_digits_message() {
        assert_eq!(
            ValidationError::StrayDigits(Category::Confirmed).to_string(),
            "Confirmed letters cannot contain numbers unless to specify which of a same letter."
        );
        assert_eq!(
            ValidationError::StrayDigits(Category::Misplaced).to_string(),
            "Misplaced letters cannot contain numbers unless to specify which of a same letter."
        );
    }

    #[test]
    fn occurrence_out_of_range_message() {
        let err = ValidationError::OccurrenceOutOfRange(vec!["s4".into(), "e3".into()]);
        assert_eq!(err.to_string(), "Guess does not contain occurrences s4,e3.");
    }

    #[test]
    fn word_errors_map_to_guess_errors() {
        assert_eq!(
            ValidationError::from(WordError::InvalidLength(4)),
            ValidationError::GuessLength
        );
        assert_eq!(
            ValidationError::from(WordError::Whitespace).to_string(),
            "Guess cannot contain any kind of space."
        );
    }
}
