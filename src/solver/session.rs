//! Solving session
//!
//! A session owns one game's candidate pool and constraint store. Each
//! accepted guess runs parse → record constraints → filter → rank, and moves
//! the session between `Guessing`, `Won`, and `Exhausted`.

use super::filter::filter_candidates;
use super::scorer::{FrequencyScorer, Scorer};
use super::ConstraintStore;
use crate::core::{GuessFeedback, RawFeedback, ValidationError, Word, parse_feedback};
use crate::wordlists::{Candidate, Vocabulary};
use log::{debug, info};
use std::fmt;
use thiserror::Error;

/// Suggestion text once no candidate fits the feedback
pub const NO_SUGGESTIONS: &str = "No more suggestions left";

/// Guesses allowed by the game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next guess
    Guessing,
    /// The answer is known
    Won,
    /// Ran out of guesses without finding the answer
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Guessing => "guessing",
            Self::Won => "won",
            Self::Exhausted => "out of guesses",
        })
    }
}

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Guess ceiling after which the session is exhausted, `None` for no limit
    pub max_guesses: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: Some(DEFAULT_MAX_GUESSES),
        }
    }
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("the session is already over ({0})")]
    Finished(SessionState),
}

/// One game of suggestions and feedback
#[derive(Debug, Clone)]
pub struct Session<S: Scorer = FrequencyScorer> {
    scorer: S,
    config: SessionConfig,
    vocabulary: Vocabulary,
    candidates: Vec<Candidate>,
    constraints: ConstraintStore,
    history: Vec<GuessFeedback>,
    guess_count: usize,
    state: SessionState,
    answer: Option<Word>,
}

impl Session<FrequencyScorer> {
    /// Start a session with the default scorer and settings
    ///
    /// An empty vocabulary falls back to the embedded one.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::RawFeedback;
    /// use wordle_assist::solver::{Session, SessionState};
    /// use wordle_assist::wordlists::Vocabulary;
    ///
    /// let mut session = Session::new(Vocabulary::embedded());
    /// assert_eq!(session.current_suggestion(), "arose");
    ///
    /// let state = session.submit_guess(&RawFeedback::new("arose", "", "all")).unwrap();
    /// assert_eq!(state, SessionState::Won);
    /// ```
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_scorer(FrequencyScorer, vocabulary, SessionConfig::default())
    }
}

impl<S: Scorer> Session<S> {
    /// Start a session with an explicit scorer and settings
    #[must_use]
    pub fn with_scorer(scorer: S, vocabulary: Vocabulary, config: SessionConfig) -> Self {
        let vocabulary = if vocabulary.is_empty() {
            info!("Empty vocabulary given, using the embedded word list");
            Vocabulary::embedded()
        } else {
            vocabulary
        };
        debug!("New session over {} words", vocabulary.len());

        Self {
            scorer,
            config,
            candidates: vocabulary.entries().to_vec(),
            vocabulary,
            constraints: ConstraintStore::new(),
            history: Vec::new(),
            guess_count: 0,
            state: SessionState::Guessing,
            answer: None,
        }
    }

    /// Submit a guess and the player's feedback for it
    ///
    /// On success the constraints, pool, and guess count are updated and the
    /// new state is returned. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Invalid` for malformed feedback and
    /// `SessionError::Finished` once the session is won or exhausted.
    pub fn submit_guess(&mut self, raw: &RawFeedback) -> Result<SessionState, SessionError> {
        if self.state != SessionState::Guessing {
            return Err(SessionError::Finished(self.state));
        }
        let feedback = parse_feedback(raw)
            .inspect_err(|e| debug!("Rejected guess '{}': {e}", raw.guess))?;
        Ok(self.record(feedback))
    }

    /// Apply already-validated feedback
    fn record(&mut self, feedback: GuessFeedback) -> SessionState {
        self.guess_count += 1;

        if feedback.confirmed.is_all() {
            info!("Guess {} '{}' is the answer", self.guess_count, feedback.guess);
            self.answer = Some(feedback.guess.clone());
            self.state = SessionState::Won;
        } else {
            let before = self.candidates.len();
            self.constraints.apply(&feedback);
            filter_candidates(&mut self.candidates, &self.constraints);
            self.scorer.rank(&mut self.candidates);
            debug!(
                "Guess {} '{}': {before} -> {} candidates",
                self.guess_count,
                feedback.guess,
                self.candidates.len()
            );

            if self.constraints.is_fully_confirmed() {
                self.answer = self.constraints.confirmed_word();
                self.state = SessionState::Won;
            } else if self.candidates.len() == 1 {
                self.state = SessionState::Won;
            }
        }

        if self.state == SessionState::Guessing
            && let Some(max) = self.config.max_guesses
            && self.guess_count >= max
        {
            info!("No guesses left after {} tries", self.guess_count);
            self.state = SessionState::Exhausted;
        }

        self.history.push(feedback);
        self.state
    }

    /// Start over with the full vocabulary
    pub fn reset(&mut self) {
        self.candidates = self.vocabulary.entries().to_vec();
        self.constraints = ConstraintStore::new();
        self.history.clear();
        self.guess_count = 0;
        self.state = SessionState::Guessing;
        self.answer = None;
    }

    /// Take back the last accepted guess
    ///
    /// The pool is rebuilt by replaying the remaining history from the full
    /// vocabulary. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        let history = std::mem::take(&mut self.history);
        self.reset();
        for feedback in history {
            self.record(feedback);
        }
        debug!("Undo: back to {} guesses", self.guess_count);
        true
    }

    /// The word to play next, or [`NO_SUGGESTIONS`] when nothing fits
    #[must_use]
    pub fn current_suggestion(&self) -> &str {
        self.answer
            .as_ref()
            .or_else(|| self.candidates.first().map(|c| &c.word))
            .map_or(NO_SUGGESTIONS, Word::text)
    }

    /// Top-ranked candidate with its weight
    #[must_use]
    pub fn best_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    #[must_use]
    pub fn remaining_candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Surviving candidates, best first
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessFeedback] {
        &self.history
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Won
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != SessionState::Guessing
    }

    /// The answer, when it was reported as fully correct or spelled out by
    /// confirmed letters
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}
