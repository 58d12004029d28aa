//! Wordle Assistant
//!
//! Suggests Wordle guesses from the letter feedback a player reports. Each
//! guess narrows a pool of candidate words, and the survivors are ranked by
//! how common their letters are in the pool and how many distinct letters they
//! use.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::RawFeedback;
//! use wordle_assist::solver::Session;
//! use wordle_assist::wordlists::Vocabulary;
//!
//! let mut session = Session::new(Vocabulary::embedded());
//! println!("Try: {}", session.current_suggestion());
//!
//! // Guessed "arose": r is in the word elsewhere, e is right where it is
//! session
//!     .submit_guess(&RawFeedback::new("arose", "r", "e"))
//!     .unwrap();
//! println!(
//!     "Try: {} ({} left)",
//!     session.current_suggestion(),
//!     session.remaining_candidate_count()
//! );
//! ```

// Core domain types
pub mod core;

// Constraint tracking, filtering, scoring, sessions
pub mod solver;

// Vocabularies
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;

#[cfg(test)]
mod tests {
    #[test]
    fn package_metadata_describes_this_crate() {
        assert_eq!(env!("CARGO_PKG_NAME"), "wordle_assist");
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "wordle_assist contributors");
        assert_eq!(env!("CARGO_PKG_REPOSITORY"), "");
    }
}
