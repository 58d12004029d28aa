//! Formatting utilities for terminal output

use crate::core::{GuessFeedback, LetterPosition, WORD_LENGTH};

/// Format feedback for a guess as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &GuessFeedback) -> String {
    if feedback.confirmed.is_all() {
        return "🟩".repeat(WORD_LENGTH);
    }
    feedback
        .guess
        .chars()
        .iter()
        .enumerate()
        .map(|(index, &letter)| {
            let fact = LetterPosition::new(letter, index);
            if feedback.confirmed.contains(fact) {
                '🟩'
            } else if feedback.misplaced.contains(fact) {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Confirmed letters laid out by position, `_` where unknown
#[must_use]
pub fn confirmed_pattern(confirmed: &[Option<u8>; WORD_LENGTH]) -> String {
    confirmed
        .iter()
        .map(|slot| slot.map_or('_', char::from).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated letters, or `-` when there are none
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Misplaced facts as `letter@position`, 1-indexed like the feedback syntax
#[must_use]
pub fn format_facts(facts: &[LetterPosition]) -> String {
    if facts.is_empty() {
        return "-".to_string();
    }
    facts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
