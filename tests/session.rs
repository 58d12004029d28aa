//! End-to-end sessions through the public API

use wordle_assist::core::{RawFeedback, ValidationError, Word};
use wordle_assist::solver::{NO_SUGGESTIONS, Session, SessionError, SessionState};
use wordle_assist::wordlists::{Candidate, Vocabulary};

fn fake_weights() -> Vocabulary {
    Vocabulary::new(
        [("hello", 3.0), ("gross", 1.5), ("nobby", 1.12)]
            .iter()
            .map(|&(w, weight)| Candidate::new(Word::new(w).unwrap(), weight))
            .collect(),
    )
}

#[test]
fn narrows_to_nobby() {
    let mut session = Session::new(fake_weights());
    assert_eq!(session.current_suggestion(), "hello");

    let state = session
        .submit_guess(&RawFeedback::new("aeiou", "o", "none"))
        .unwrap();
    assert_eq!(state, SessionState::Guessing);
    assert_eq!(session.guess_count(), 1);
    assert_eq!(session.current_suggestion(), "gross");
    assert_eq!(session.remaining_candidate_count(), 2);

    let state = session
        .submit_guess(&RawFeedback::new("gross", "o", ""))
        .unwrap();
    assert_eq!(state, SessionState::Won);
    assert!(session.is_solved());
    assert_eq!(session.current_suggestion(), "nobby");
    assert_eq!(session.remaining_candidate_count(), 1);
}

#[test]
fn default_vocabulary_opens_with_arose() {
    let session = Session::new(Vocabulary::new(Vec::new()));
    assert_eq!(session.current_suggestion(), "arose");
    assert!(session.remaining_candidate_count() > 2000);
}

#[test]
fn malformed_feedback_is_reported_in_order() {
    let mut session = Session::new(fake_weights());
    let cases = [
        (RawFeedback::new("gue ss", "", ""), ValidationError::GuessWhitespace),
        (RawFeedback::new("gue5s", "", ""), ValidationError::GuessDigits),
        (RawFeedback::new("gu-ss", "", ""), ValidationError::GuessNotLetters),
        (RawFeedback::new("guesss", "", ""), ValidationError::GuessLength),
        (RawFeedback::new("guess", "all", ""), ValidationError::AllNotAllowed),
    ];
    for (raw, expected) in cases {
        assert_eq!(
            session.submit_guess(&raw),
            Err(SessionError::Invalid(expected))
        );
    }
    assert_eq!(session.guess_count(), 0);
    assert_eq!(session.remaining_candidate_count(), 3);
}

#[test]
fn missing_letter_names_the_letter() {
    let mut session = Session::new(fake_weights());
    let err = session
        .submit_guess(&RawFeedback::new("guess", "", "l"))
        .unwrap_err();
    assert!(err.to_string().contains(" l "));
    assert_eq!(session.current_suggestion(), "hello");
}

#[test]
fn repeated_letter_needs_distinct_occurrences() {
    let mut session = Session::new(fake_weights());
    let err = session
        .submit_guess(&RawFeedback::new("sassy", "s s1", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Invalid(ValidationError::RepeatedLetter { .. })
    ));

    // With occurrences it is accepted, and s is never excluded
    session
        .submit_guess(&RawFeedback::new("sassy", "", "s1 s3"))
        .unwrap();
    assert!(!session.constraints().is_excluded(b's'));
    assert_eq!(session.constraints().confirmed()[0], Some(b's'));
    assert_eq!(session.constraints().confirmed()[3], Some(b's'));
}

#[test]
fn impossible_feedback_leaves_no_suggestion() {
    let mut session = Session::new(fake_weights());
    session
        .submit_guess(&RawFeedback::new("quack", "", "q u"))
        .unwrap();
    assert_eq!(session.remaining_candidate_count(), 0);
    assert_eq!(session.current_suggestion(), NO_SUGGESTIONS);
}
