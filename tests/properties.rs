//! Property tests for sessions driven by generated feedback

use proptest::prelude::*;
use wordle_assist::core::{RawFeedback, Word, simulate_feedback};
use wordle_assist::solver::{FrequencyScorer, Session, SessionConfig, SessionState};
use wordle_assist::wordlists::Vocabulary;

const WORDS: &[&str] = &[
    "arose", "crane", "slate", "irate", "gross", "nobby", "hello", "sassy", "salty", "stash",
    "mamma", "tenet", "eerie", "adieu", "plumb", "fjord",
];

fn vocabulary() -> Vocabulary {
    Vocabulary::from_words(WORDS.iter().map(|w| Word::new(*w).unwrap()).collect())
}

fn word() -> impl Strategy<Value = Word> {
    prop::sample::select(WORDS).prop_map(|w| Word::new(w).unwrap())
}

fn unlimited() -> SessionConfig {
    SessionConfig { max_guesses: None }
}

proptest! {
    #[test]
    fn pool_never_grows(answer in word(), guesses in prop::collection::vec(word(), 1..8)) {
        let mut session = Session::with_scorer(FrequencyScorer, vocabulary(), unlimited());
        let mut remaining = session.remaining_candidate_count();

        for guess in guesses {
            if session.state() != SessionState::Guessing {
                break;
            }
            let count = session.guess_count();
            session.submit_guess(&simulate_feedback(&guess, &answer)).unwrap();
            prop_assert_eq!(session.guess_count(), count + 1);
            prop_assert!(session.remaining_candidate_count() <= remaining);
            remaining = session.remaining_candidate_count();
        }
    }

    #[test]
    fn answer_always_survives(answer in word(), guesses in prop::collection::vec(word(), 1..8)) {
        let mut session = Session::with_scorer(FrequencyScorer, vocabulary(), unlimited());
        for guess in guesses {
            if session.state() != SessionState::Guessing {
                break;
            }
            session.submit_guess(&simulate_feedback(&guess, &answer)).unwrap();
            if session.answer().is_none() {
                prop_assert!(session.candidates().iter().any(|c| c.word == answer));
            }
        }
    }

    #[test]
    fn repeating_feedback_changes_nothing(answer in word(), guess in word()) {
        prop_assume!(guess != answer);
        let mut session = Session::with_scorer(FrequencyScorer, vocabulary(), unlimited());
        let raw = simulate_feedback(&guess, &answer);
        session.submit_guess(&raw).unwrap();
        prop_assume!(session.state() == SessionState::Guessing);

        let constraints = session.constraints().clone();
        let pool: Vec<Word> = session.candidates().iter().map(|c| c.word.clone()).collect();
        session.submit_guess(&raw).unwrap();

        prop_assert_eq!(session.constraints(), &constraints);
        let again: Vec<Word> = session.candidates().iter().map(|c| c.word.clone()).collect();
        prop_assert_eq!(again, pool);
    }

    #[test]
    fn rejected_input_changes_nothing(guess in "[a-z0-9 ]{0,7}", misplaced in "[a-z0-9 ]{0,6}") {
        let mut session = Session::new(vocabulary());
        let before = session.remaining_candidate_count();
        if session.submit_guess(&RawFeedback::new(guess, misplaced, "")).is_err() {
            prop_assert_eq!(session.guess_count(), 0);
            prop_assert_eq!(session.remaining_candidate_count(), before);
            prop_assert!(session.constraints().is_empty());
        }
    }
}
