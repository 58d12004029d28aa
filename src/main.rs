//! Wordle Assistant - CLI
//!
//! Interactive guess suggestions plus solving, accuracy, and weight tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_assist::{
    commands::{
        AccuracyConfig, SolveConfig, compute_weights, run_accuracy, run_simple, solve_word,
        write_weights,
    },
    logging,
    output::{print_accuracy_result, print_solve_result},
    solver::{DEFAULT_MAX_GUESSES, ScorerType, Session, SessionConfig},
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Suggests Wordle guesses from the feedback you give it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scorer: frequency (default, re-ranks every guess) or static
    #[arg(short, long, global = true, default_value = "frequency")]
    scorer: String,

    /// Word list file: one word per line, `word weight` lines, or JSON
    /// (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show the feedback and candidate counts of each turn
        #[arg(short, long)]
        details: bool,
    },

    /// Solve every word of the list and report how well the suggestions do
    Accuracy {
        /// Only test the first N words of the list
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Test a random sample of N words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute letter-frequency weights for a word list
    Weights {
        /// Word list to weight
        input: PathBuf,

        /// Output file (`.json` for JSON); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_vocabulary(wordlist: Option<&PathBuf>) -> Result<Vocabulary> {
    match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Ok(Vocabulary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity);

    let scorer = ScorerType::from_name(&cli.scorer);
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            let vocabulary = load_vocabulary(cli.wordlist.as_ref())?;
            run_simple_command(scorer, vocabulary, cli.max_guesses)
        }
        Commands::Solve { word, details } => {
            let vocabulary = load_vocabulary(cli.wordlist.as_ref())?;
            let config = SolveConfig {
                target: word,
                max_guesses: cli.max_guesses,
            };
            let result = solve_word(&config, scorer, &vocabulary)
                .with_context(|| format!("invalid target word '{}'", config.target))?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Accuracy { limit, sample, seed } => {
            let vocabulary = load_vocabulary(cli.wordlist.as_ref())?;
            println!(
                "Testing against {} words with the {} scorer",
                limit.or(sample).unwrap_or(vocabulary.len()).min(vocabulary.len()),
                scorer.name()
            );
            let config = AccuracyConfig {
                limit,
                sample,
                seed,
                max_guesses: cli.max_guesses,
                progress: true,
            };
            let stats = run_accuracy(scorer, &vocabulary, &config);
            print_accuracy_result(&stats);
            Ok(())
        }
        Commands::Weights { input, output } => {
            let vocabulary = compute_weights(&input)?;
            write_weights(&vocabulary, output.as_deref())
        }
    }
}

fn run_simple_command(scorer: ScorerType, vocabulary: Vocabulary, max_guesses: usize) -> Result<()> {
    let config = SessionConfig {
        max_guesses: Some(max_guesses),
    };
    let mut session = Session::with_scorer(scorer, vocabulary, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}
