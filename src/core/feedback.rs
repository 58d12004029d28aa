//! Feedback parsing
//!
//! A player reports feedback for a guess as two token lists: letters that are
//! in the answer but misplaced, and letters that are confirmed in place. Each
//! list is either a sentinel (`none`, or `all` for confirmed) or
//! space-separated tokens. A token is a bare letter, meaning its first
//! occurrence in the guess, or a letter followed by a digit selecting the nth
//! occurrence (`s2` is the second `s`).
//!
//! Parsing resolves every token to a [`LetterPosition`] in the guess, or fails
//! with a [`ValidationError`] describing what the player has to fix.

use super::{Category, LetterPosition, ValidationError, WORD_LENGTH, Word};

/// Sentinel: no letters in this category
pub const NONE: &str = "none";

/// Sentinel: every letter is confirmed
pub const ALL: &str = "all";

/// Feedback for one guess, as typed by the player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFeedback {
    pub guess: String,
    pub misplaced: String,
    pub confirmed: String,
}

impl RawFeedback {
    pub fn new(
        guess: impl Into<String>,
        misplaced: impl Into<String>,
        confirmed: impl Into<String>,
    ) -> Self {
        Self {
            guess: guess.into(),
            misplaced: misplaced.into(),
            confirmed: confirmed.into(),
        }
    }
}

/// Parsed feedback for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing in this category
    None,
    /// Every letter of the guess is confirmed (the guess is the answer)
    All,
    /// Facts resolved against the guess, in token order
    Facts(Vec<LetterPosition>),
}

impl Feedback {
    /// The resolved facts, empty for the sentinels
    #[must_use]
    pub fn facts(&self) -> &[LetterPosition] {
        match self {
            Self::Facts(facts) => facts,
            Self::None | Self::All => &[],
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether any fact sits at this letter and position
    #[must_use]
    pub fn contains(&self, fact: LetterPosition) -> bool {
        self.facts().contains(&fact)
    }
}

/// A validated guess with both feedback categories resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    pub guess: Word,
    pub misplaced: Feedback,
    pub confirmed: Feedback,
}

/// One token of a category list
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    letter: u8,
    occurrence: Option<usize>,
}

impl<'a> Token<'a> {
    fn lex(text: &'a str) -> Option<Self> {
        match *text.as_bytes() {
            [letter] if letter.is_ascii_lowercase() => Some(Self {
                text,
                letter,
                occurrence: None,
            }),
            [letter, digit] if letter.is_ascii_lowercase() && (b'1'..=b'9').contains(&digit) => {
                Some(Self {
                    text,
                    letter,
                    occurrence: Some(usize::from(digit - b'0')),
                })
            }
            _ => None,
        }
    }

    fn resolve(self, guess: &Word) -> Option<LetterPosition> {
        guess
            .nth_position_of(self.letter, self.occurrence.unwrap_or(1))
            .map(|index| LetterPosition::new(self.letter, index))
    }
}

/// A category list before token resolution
enum Listing<'a> {
    None,
    All,
    Tokens(Vec<&'a str>),
}

impl<'a> Listing<'a> {
    fn new(text: &'a str) -> Self {
        match text {
            NONE => Self::None,
            ALL => Self::All,
            _ => Self::Tokens(text.split_whitespace().collect()),
        }
    }

    fn raw_tokens(&self) -> &[&'a str] {
        match self {
            Self::Tokens(tokens) => tokens,
            Self::None | Self::All => &[],
        }
    }
}

/// Parse and validate one guess and its feedback
///
/// Input is lowercased first. An empty category string is the same as `none`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking the guess before the
/// token lists. A check reports every offending letter or token it finds.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Feedback, LetterPosition, RawFeedback, parse_feedback};
///
/// let parsed = parse_feedback(&RawFeedback::new("sassy", "s2", "s1 y")).unwrap();
/// assert_eq!(parsed.misplaced, Feedback::Facts(vec![LetterPosition::new(b's', 2)]));
/// assert_eq!(parsed.confirmed.facts().len(), 2);
/// ```
pub fn parse_feedback(raw: &RawFeedback) -> Result<GuessFeedback, ValidationError> {
    let guess = Word::new(raw.guess.as_str())?;

    let misplaced_text = raw.misplaced.trim().to_lowercase();
    let confirmed_text = raw.confirmed.trim().to_lowercase();
    let misplaced = Listing::new(&misplaced_text);
    let confirmed = Listing::new(&confirmed_text);
    let lists = [
        (Category::Misplaced, &misplaced),
        (Category::Confirmed, &confirmed),
    ];

    for (category, listing) in lists {
        let stray_digits = listing
            .raw_tokens()
            .iter()
            .any(|t| t.bytes().any(|b| b.is_ascii_digit()) && Token::lex(t).is_none());
        if stray_digits {
            return Err(ValidationError::StrayDigits(category));
        }
    }

    if matches!(misplaced, Listing::All) {
        return Err(ValidationError::AllNotAllowed);
    }

    let mut tokens: [Vec<Token<'_>>; 2] = [Vec::new(), Vec::new()];
    for (slot, (_, listing)) in tokens.iter_mut().zip(lists) {
        for &text in listing.raw_tokens() {
            let token = Token::lex(text).ok_or_else(|| ValidationError::NotALetter(text.into()))?;
            slot.push(token);
        }
    }

    for ((category, _), list) in lists.iter().zip(&tokens) {
        let mut letters: Vec<char> = Vec::new();
        for token in list.iter().filter(|t| !guess.has_letter(t.letter)) {
            let letter = char::from(token.letter);
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        if !letters.is_empty() {
            return Err(ValidationError::LettersNotInGuess {
                category: *category,
                letters,
            });
        }
    }

    let out_of_range: Vec<String> = tokens
        .iter()
        .flatten()
        .filter(|t| t.resolve(&guess).is_none())
        .map(|t| t.text.to_string())
        .collect();
    if !out_of_range.is_empty() {
        return Err(ValidationError::OccurrenceOutOfRange(out_of_range));
    }

    let mut resolved: [Vec<LetterPosition>; 2] = [Vec::new(), Vec::new()];
    for (((category, _), list), facts) in lists.iter().zip(&tokens).zip(resolved.iter_mut()) {
        let mut repeated: Vec<char> = Vec::new();
        for fact in list.iter().filter_map(|t| t.resolve(&guess)) {
            if facts.contains(&fact) {
                if !repeated.contains(&fact.letter_char()) {
                    repeated.push(fact.letter_char());
                }
            } else {
                facts.push(fact);
            }
        }
        if !repeated.is_empty() {
            return Err(ValidationError::RepeatedLetter {
                category: *category,
                letters: repeated,
            });
        }
    }

    let [misplaced_facts, confirmed_facts] = resolved;
    let mut conflicts: Vec<char> = Vec::new();
    for fact in misplaced_facts.iter().filter(|f| confirmed_facts.contains(f)) {
        if !conflicts.contains(&fact.letter_char()) {
            conflicts.push(fact.letter_char());
        }
    }
    if !conflicts.is_empty() {
        return Err(ValidationError::ConflictingCategories(conflicts));
    }

    Ok(GuessFeedback {
        guess,
        misplaced: finish(&misplaced, misplaced_facts),
        confirmed: finish(&confirmed, confirmed_facts),
    })
}

fn finish(listing: &Listing<'_>, facts: Vec<LetterPosition>) -> Feedback {
    match listing {
        Listing::None => Feedback::None,
        Listing::All => Feedback::All,
        Listing::Tokens(_) => Feedback::Facts(facts),
    }
}

/// The feedback a player would type for `guess` when the answer is `answer`
///
/// Uses the game's coloring rules: exact matches first, then misplaced letters
/// limited by how many of that letter the answer has left. Letters repeated in
/// the guess are written with an occurrence selector.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Word, simulate_feedback};
///
/// let guess = Word::new("gross").unwrap();
/// let answer = Word::new("nobby").unwrap();
/// let raw = simulate_feedback(&guess, &answer);
/// assert_eq!(raw.misplaced, "o");
/// assert_eq!(raw.confirmed, "none");
/// ```
#[must_use]
pub fn simulate_feedback(guess: &Word, answer: &Word) -> RawFeedback {
    let mut confirmed = [false; WORD_LENGTH];
    let mut misplaced = [false; WORD_LENGTH];
    let mut remaining = [0u8; 26];

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == answer.char_at(i) {
            confirmed[i] = true;
        } else {
            remaining[usize::from(answer.char_at(i) - b'a')] += 1;
        }
    }

    for i in (0..WORD_LENGTH).filter(|&i| !confirmed[i]) {
        let slot = &mut remaining[usize::from(guess.char_at(i) - b'a')];
        if *slot > 0 {
            misplaced[i] = true;
            *slot -= 1;
        }
    }

    if confirmed.iter().all(|&c| c) {
        return RawFeedback::new(guess.text(), NONE, ALL);
    }

    RawFeedback::new(
        guess.text(),
        tokens_for(guess, &misplaced),
        tokens_for(guess, &confirmed),
    )
}

fn tokens_for(guess: &Word, marked: &[bool; WORD_LENGTH]) -> String {
    let tokens: Vec<String> = (0..WORD_LENGTH)
        .filter(|&i| marked[i])
        .map(|i| {
            let letter = guess.char_at(i);
            if guess.count_of(letter) > 1 {
                let occurrence = guess.positions_of(letter).take_while(|&p| p < i).count() + 1;
                format!("{}{occurrence}", char::from(letter))
            } else {
                char::from(letter).to_string()
            }
        })
        .collect();

    if tokens.is_empty() {
        NONE.to_string()
    } else {
        tokens.join(" ")
    }
}
