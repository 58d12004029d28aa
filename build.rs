//! Build script to generate the embedded weighted vocabulary
//!
//! Reads `word weight` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_weighted_list(
        "data/words_with_weights.txt",
        &Path::new(&out_dir).join("weighted_words.rs"),
        "WEIGHTED_WORDS",
        "Default vocabulary with precomputed letter-frequency weights, heaviest first",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words_with_weights.txt");
}

fn generate_weighted_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, f64)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.split_whitespace();
            let word = parts
                .next()
                .unwrap_or_else(|| panic!("Missing word in line '{line}'"));
            let weight = parts
                .next()
                .and_then(|w| w.parse::<f64>().ok())
                .unwrap_or_else(|| panic!("Missing or invalid weight in line '{line}'"));
            (word, weight)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, weight) in entries {
        writeln!(output, "    (\"{word}\", {weight:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
