//! Candidate filtering
//!
//! Narrows a candidate pool to the words consistent with a [`ConstraintStore`].

use super::ConstraintStore;
use crate::core::Word;
use crate::wordlists::Candidate;

/// Check a single word against every recorded constraint
///
/// A word survives when it has no excluded letter, contains every misplaced
/// letter but not at the spot it was reported, and matches every confirmed
/// position.
#[must_use]
pub fn is_consistent(word: &Word, constraints: &ConstraintStore) -> bool {
    let excluded = constraints.excluded_mask();
    if excluded != 0 && word.letter_set() & excluded != 0 {
        return false;
    }

    let misplaced_ok = constraints
        .misplaced()
        .iter()
        .all(|fact| word.has_letter(fact.letter) && word.char_at(fact.index) != fact.letter);
    if !misplaced_ok {
        return false;
    }

    constraints
        .confirmed()
        .iter()
        .enumerate()
        .all(|(index, slot)| slot.is_none_or(|letter| word.char_at(index) == letter))
}

/// Drop every candidate that contradicts the constraints, keeping order
///
/// Applied to a session's own, shrinking pool: a word removed once never
/// comes back.
pub fn filter_candidates(candidates: &mut Vec<Candidate>, constraints: &ConstraintStore) {
    candidates.retain(|candidate| is_consistent(&candidate.word, constraints));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool(words: &[&str]) -> Vec<Candidate> {
        words.iter().map(|w| Candidate::new(word(w), 1.0)).collect()
    }

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.text()).collect()
    }

    #[test]
    fn empty_store_keeps_everything() {
        let store = ConstraintStore::new();
        let mut candidates = pool(&["hello", "gross", "nobby"]);
        filter_candidates(&mut candidates, &store);
        assert_eq!(texts(&candidates), vec!["hello", "gross", "nobby"]);
    }

    #[test]
    fn excluded_letters_remove_words() {
        let mut store = ConstraintStore::new();
        store.record_excluded(b'e');
        assert!(!is_consistent(&word("hello"), &store));
        assert!(is_consistent(&word("gross"), &store));
    }

    #[test]
    fn misplaced_requires_letter_elsewhere() {
        let mut store = ConstraintStore::new();
        store.record_misplaced(b'o', 3);
        assert!(is_consistent(&word("gross"), &store));
        assert!(is_consistent(&word("nobby"), &store));
        // o sits exactly at the reported spot
        assert!(!is_consistent(&word("igloo"), &store));
        // no o at all
        assert!(!is_consistent(&word("crane"), &store));
    }

    #[test]
    fn confirmed_positions_must_match() {
        let mut store = ConstraintStore::new();
        store.record_confirmed(b'a', 2);
        assert!(is_consistent(&word("crane"), &store));
        assert!(is_consistent(&word("slate"), &store));
        assert!(!is_consistent(&word("arose"), &store));
    }

    #[test]
    fn filter_keeps_pool_order() {
        let mut store = ConstraintStore::new();
        for letter in *b"aeiu" {
            store.record_excluded(letter);
        }
        store.record_misplaced(b'o', 3);
        let mut candidates = pool(&["hello", "gross", "nobby"]);
        filter_candidates(&mut candidates, &store);
        assert_eq!(texts(&candidates), vec!["gross", "nobby"]);
    }

    #[test]
    fn filtering_is_monotonic() {
        let mut store = ConstraintStore::new();
        store.record_excluded(b'e');
        let mut candidates = pool(&["hello", "gross"]);
        filter_candidates(&mut candidates, &store);
        assert_eq!(texts(&candidates), vec!["gross"]);

        // Even with a store that would admit it, a removed word stays removed
        filter_candidates(&mut candidates, &ConstraintStore::new());
        assert_eq!(texts(&candidates), vec!["gross"]);
    }
}
