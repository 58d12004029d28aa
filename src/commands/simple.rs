//! Simple interactive CLI mode
//!
//! Asks for each guess and its feedback, then prints the next suggestion.
//! Besides a guess, the guess prompt accepts `quit`/`exit`, `undo`, and `new`.
//! Either feedback prompt accepts `same` to reuse the previous answer to it.

use crate::core::RawFeedback;
use crate::output::write_status;
use crate::solver::{Scorer, Session, SessionState};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const GUESS_PROMPT: &str = "What is your guess?";
const MISPLACED_PROMPT: &str = "Which letters are used but not in the right spot?";
const CONFIRMED_PROMPT: &str = "Which letters are used and in the right spot?";
const SAME: &str = "same";

/// Run the interactive loop until the game ends, the player quits, or input
/// runs out
///
/// Rejected feedback is reported and asked for again without using up a
/// guess. Returns the session state at exit.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(
    session: &mut Session<S>,
    mut input: R,
    out: &mut W,
) -> io::Result<SessionState>
where
    S: Scorer,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", "Wordle Assistant".bright_cyan().bold())?;
    writeln!(
        out,
        "Enter letters separated by spaces, with a number for repeated letters (s1 s2)."
    )?;
    writeln!(
        out,
        "Use 'none' for no letters and 'all' when the guess was right.\n"
    )?;
    write_status(out, session)?;

    let mut previous: Option<RawFeedback> = None;

    while session.state() == SessionState::Guessing {
        let Some(guess) = read_answer(&mut input, out, GUESS_PROMPT)? else {
            return Ok(session.state());
        };

        match guess.to_ascii_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "Thanks for playing!")?;
                return Ok(session.state());
            }
            "undo" => {
                if session.undo() {
                    writeln!(out, "Undone, back to guess {}", session.guess_count() + 1)?;
                    previous = None;
                } else {
                    writeln!(out, "Nothing to undo")?;
                }
                write_status(out, session)?;
                continue;
            }
            "new" => {
                session.reset();
                previous = None;
                writeln!(out, "New game started")?;
                write_status(out, session)?;
                continue;
            }
            _ => {}
        }

        let Some(misplaced) = read_answer(&mut input, out, MISPLACED_PROMPT)? else {
            return Ok(session.state());
        };
        let Some(confirmed) = read_answer(&mut input, out, CONFIRMED_PROMPT)? else {
            return Ok(session.state());
        };

        let raw = RawFeedback::new(
            guess,
            reuse_previous(misplaced, previous.as_ref().map(|p| p.misplaced.as_str())),
            reuse_previous(confirmed, previous.as_ref().map(|p| p.confirmed.as_str())),
        );

        match session.submit_guess(&raw) {
            Ok(_) => {
                let guessed_it = session
                    .history()
                    .last()
                    .is_some_and(|f| f.confirmed.is_all());
                if !guessed_it {
                    write_status(out, session)?;
                }
                previous = Some(raw);
            }
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }

    match session.state() {
        SessionState::Won => writeln!(out, "{}", "Yay! You won!".bright_green().bold())?,
        SessionState::Exhausted => writeln!(out, "Better luck next time.")?,
        SessionState::Guessing => {}
    }
    Ok(session.state())
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt} ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn reuse_previous(answer: String, previous: Option<&str>) -> String {
    match previous {
        Some(previous) if answer.eq_ignore_ascii_case(SAME) => previous.to_string(),
        _ => answer,
    }
}
