//! Display functions for sessions and command results

use super::formatters::{
    confirmed_pattern, create_progress_bar, feedback_to_emoji, format_facts, format_letters,
};
use crate::commands::{AccuracyStatistics, SolveResult};
use crate::solver::{NO_SUGGESTIONS, Scorer, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Write the current suggestion and what is known so far
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_status<W: Write, S: Scorer>(out: &mut W, session: &Session<S>) -> io::Result<()> {
    let suggestion = session.current_suggestion();
    if suggestion == NO_SUGGESTIONS {
        writeln!(out, "{}", NO_SUGGESTIONS.red())?;
    } else {
        writeln!(
            out,
            "Suggested word: {} ({} {} left)",
            suggestion.to_uppercase().bright_green().bold(),
            session.remaining_candidate_count(),
            if session.remaining_candidate_count() == 1 {
                "candidate"
            } else {
                "candidates"
            }
        )?;
    }

    let constraints = session.constraints();
    if !constraints.is_empty() {
        writeln!(
            out,
            "  Confirmed: {}   Misplaced: {}   Excluded: {}",
            confirmed_pattern(constraints.confirmed()).bright_white(),
            format_facts(constraints.misplaced()).yellow(),
            format_letters(&constraints.excluded_letters()).bright_black()
        )?;
    }
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!("  Misplaced:  {}", step.raw.misplaced);
            println!("  Confirmed:  {}", step.raw.confirmed);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print accuracy statistics
pub fn print_accuracy_result(stats: &AccuracyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Accuracy Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.success_rate() * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", (1.0 - stats.success_rate()) * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (guesses, count) in &stats.guess_distribution {
        let percentage = *count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Missed Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  … and {} more", stats.failed_words.len() - 10);
        }
    }
}
