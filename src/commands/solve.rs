//! Word solving command
//!
//! Plays a session against a known target, generating the feedback a player
//! would type, and returns the solution path.

use crate::core::{Feedback, GuessFeedback, RawFeedback, Word, WordError, simulate_feedback};
use crate::solver::{DEFAULT_MAX_GUESSES, Scorer, Session, SessionConfig, SessionState};
use crate::wordlists::Vocabulary;
use log::{debug, warn};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    /// Guesses played, including the winning one
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: String,
    /// Feedback as it would be typed
    pub raw: RawFeedback,
    pub feedback: GuessFeedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, always playing the session's top suggestion
///
/// When the pool narrows to a single word the session is won, and that word is
/// still played as a final guess so the step count matches a real game.
///
/// # Errors
///
/// Returns an error if the target is not a valid five-letter word.
pub fn solve_word<S: Scorer>(
    config: &SolveConfig,
    scorer: S,
    vocabulary: &Vocabulary,
) -> Result<SolveResult, WordError> {
    let target = Word::new(config.target.as_str())?;
    let session_config = SessionConfig {
        max_guesses: Some(config.max_guesses),
    };
    let mut session = Session::with_scorer(scorer, vocabulary.clone(), session_config);
    let mut steps: Vec<GuessStep> = Vec::new();

    while session.state() == SessionState::Guessing {
        let Some(best) = session.best_candidate() else {
            debug!("No candidates left for '{target}'");
            break;
        };
        let guess = best.word.clone();
        let candidates_before = session.remaining_candidate_count();
        let raw = simulate_feedback(&guess, &target);

        if let Err(e) = session.submit_guess(&raw) {
            warn!("Generated feedback for '{guess}' was rejected: {e}");
            break;
        }
        let Some(feedback) = session.history().last().cloned() else {
            break;
        };
        steps.push(GuessStep {
            guess: guess.text().to_string(),
            raw,
            feedback,
            candidates_before,
            candidates_after: session.remaining_candidate_count(),
        });
    }

    let guessed_it = steps.last().is_some_and(|s| s.feedback.confirmed.is_all());
    if session.is_solved() && !guessed_it && session.current_suggestion() == target.text() {
        // Narrowed to the answer without playing it yet
        let raw = simulate_feedback(&target, &target);
        let feedback = GuessFeedback {
            guess: target.clone(),
            misplaced: Feedback::None,
            confirmed: Feedback::All,
        };
        steps.push(GuessStep {
            guess: target.text().to_string(),
            raw,
            feedback,
            candidates_before: session.remaining_candidate_count(),
            candidates_after: session.remaining_candidate_count(),
        });
    }

    let success = steps
        .last()
        .is_some_and(|s| s.feedback.confirmed.is_all() && s.guess == target.text())
        && steps.len() <= config.max_guesses;

    Ok(SolveResult {
        success,
        steps,
        target: config.target.clone(),
    })
}
