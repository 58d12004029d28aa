//! Command implementations

pub mod accuracy;
pub mod simple;
pub mod solve;
pub mod weights;

pub use accuracy::{AccuracyConfig, AccuracyStatistics, run_accuracy, select_targets};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use weights::{compute_weights, write_weights};
