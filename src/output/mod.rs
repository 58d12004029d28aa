//! Terminal output formatting
//!
//! Display utilities for sessions, CLI results, and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_accuracy_result, print_solve_result, write_status};
