//! Accuracy run
//!
//! Solves every vocabulary word (or a subset) as the hidden answer and
//! collects how many guesses the suggestions needed.

use super::solve::{SolveConfig, SolveResult, solve_word};
use crate::core::Word;
use crate::solver::Scorer;
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which answers to test
#[derive(Debug, Clone, Copy, Default)]
pub struct AccuracyConfig {
    /// Only the first `limit` vocabulary words
    pub limit: Option<usize>,
    /// A random sample of this many words (applied after `limit`)
    pub sample: Option<usize>,
    /// Seed for the sample, random when absent
    pub seed: Option<u64>,
    pub max_guesses: usize,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

/// Statistics from an accuracy run
#[derive(Debug, Clone)]
pub struct AccuracyStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses needed → number of solved words
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    /// Solved words that needed the most guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub total_time: Duration,
}

impl AccuracyStatistics {
    /// Fraction of tested words that were solved
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }

    fn from_results(results: &[SolveResult], total_time: Duration) -> Self {
        let solved: Vec<&SolveResult> = results.iter().filter(|r| r.success).collect();

        let mut guess_distribution = BTreeMap::new();
        for result in &solved {
            *guess_distribution.entry(result.guess_count()).or_insert(0) += 1;
        }

        let total_guesses: usize = solved.iter().map(|r| r.guess_count()).sum();
        let average_guesses = if solved.is_empty() {
            0.0
        } else {
            total_guesses as f64 / solved.len() as f64
        };

        let mut hardest_words: Vec<(String, usize)> = solved
            .iter()
            .filter(|r| r.guess_count() >= 5)
            .map(|r| (r.target.clone(), r.guess_count()))
            .collect();
        hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        hardest_words.truncate(10);

        let failed_words: Vec<String> = results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.target.clone())
            .collect();

        Self {
            total_words: results.len(),
            solved: solved.len(),
            failed: failed_words.len(),
            guess_distribution,
            average_guesses,
            hardest_words,
            failed_words,
            total_time,
        }
    }
}

/// Pick the answers an accuracy run will test
#[must_use]
pub fn select_targets(vocabulary: &Vocabulary, config: &AccuracyConfig) -> Vec<Word> {
    let mut targets: Vec<Word> = vocabulary
        .words()
        .take(config.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    if let Some(sample) = config.sample {
        match config.seed {
            Some(seed) => targets.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => targets.shuffle(&mut rand::rng()),
        }
        targets.truncate(sample);
    }
    targets
}

/// Solve every selected answer in parallel
///
/// Each answer gets its own session; only the vocabulary is shared.
pub fn run_accuracy<S>(scorer: S, vocabulary: &Vocabulary, config: &AccuracyConfig) -> AccuracyStatistics
where
    S: Scorer + Copy + Send + Sync,
{
    let targets = select_targets(vocabulary, config);
    info!("Testing {} answers", targets.len());

    let pb = if config.progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<SolveResult> = targets
        .par_iter()
        .filter_map(|target| {
            let solve_config = SolveConfig {
                target: target.text().to_string(),
                max_guesses: config.max_guesses,
            };
            let result = solve_word(&solve_config, scorer, vocabulary).ok();
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    AccuracyStatistics::from_results(&results, start.elapsed())
}
