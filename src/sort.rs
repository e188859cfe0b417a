// src/sort.rs
// =============================================================================
// This module implements the generic line-sorting utility behind the
// `sort` subcommand: read a text file, sort its lines alphabetically,
// write them to another file.
//
// It knows nothing about the word:count format - it sorts ANY text file
// byte-lexicographically, which for the frequency table means
// alphabetical word order instead of frequency order.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// Sorts the lines of `input` and writes them to `output`
//
// Returns how many lines were written. A missing input file is a fatal
// error - there is nothing sensible to sort.
pub fn sort_lines(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort();

    let mut out = String::with_capacity(text.len());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }

    fs::write(output, out)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(lines.len())
}
