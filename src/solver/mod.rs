//! Wordle solving
//!
//! Constraint recording, candidate filtering, scoring, and the session state
//! machine that ties them together.

pub mod constraints;
pub mod filter;
pub mod scorer;
mod session;

pub use constraints::ConstraintStore;
pub use filter::{filter_candidates, is_consistent};
pub use scorer::{
    FrequencyScorer, Scorer, ScorerType, StaticScorer, frequency_weight, letter_frequencies,
    precompute_weights,
};
pub use session::{
    DEFAULT_MAX_GUESSES, NO_SUGGESTIONS, Session, SessionConfig, SessionError, SessionState,
};
