//! Core domain types for the feedback engine
//!
//! Words, letter-position facts, and the feedback parser. Everything here is
//! pure: no I/O and no session state.

mod error;
mod fact;
pub mod feedback;
mod word;

pub use error::ValidationError;
pub use fact::{Category, LetterPosition};
pub use feedback::{Feedback, GuessFeedback, RawFeedback, parse_feedback, simulate_feedback};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_bit;
