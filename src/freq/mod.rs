// src/freq/mod.rs
// =============================================================================
// This module implements the word frequency table.
//
// The table is the main artifact the crawler produces:
// - Every accepted word increments its entry by one
// - finalize() orders the entries by count, most frequent first
// - save()/load() persist the table as "word:count" lines
//
// Why IndexMap instead of HashMap?
// - IndexMap remembers insertion order
// - The final sort is stable, so words with equal counts keep the order
//   in which they were first seen on the site
//
// Rust concepts:
// - Wrapper structs: One type that owns the map and controls all updates
// - Result<T, E>: For the file operations that can fail
// =============================================================================

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// One row of the table, used when listing entries for display or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The normalized (lower-case, ASCII alphabetic) word
    pub word: String,
    /// How many times it was seen
    pub count: u64,
}

// The accumulated word -> count mapping
//
// All updates go through increment(), so there is no implicit
// "default to zero" behavior hidden in call sites
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`, inserting it with count 1 if new
    pub fn increment(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
    }

    /// Returns the count for `word`, 0 if it was never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (total word occurrences)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over (word, count) pairs in the table's current order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Reorders the table by count, most frequent first
    ///
    /// IndexMap::sort_by is a stable sort, so entries with equal counts
    /// stay in first-seen order
    pub fn finalize(&mut self) {
        self.counts.sort_by(|_, a, _, b| b.cmp(a));
    }

    /// Returns up to `limit` entries with a count strictly above
    /// `min_frequency`, most frequent first
    pub fn top(&self, limit: usize, min_frequency: u64) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .filter(|(_, &count)| count > min_frequency)
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();

        // Stable sort: ties keep the table's current order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        entries
    }

    /// Writes the table to `path`, one "word:count" line per entry,
    /// in the table's current order (call finalize() first)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let mut out = String::new();
        for (word, count) in &self.counts {
            out.push_str(&format!("{}:{}\n", word, count));
        }

        fs::write(path, out)
            .with_context(|| format!("Failed to write frequency table to {}", path.display()))
    }

    /// Reads a table previously written by save()
    ///
    /// Each line is split on the FIRST ':' so this stays compatible with
    /// any consumer that parses the same format. A missing file or a line
    /// that doesn't look like "word:count" is an error - there is no way
    /// to reconstruct the table from partial data.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read frequency table from {}", path.display()))?;

        let mut table = FrequencyTable::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }

            let (word, count) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("Malformed line in {}: {:?}", path.display(), line))?;

            let count: u64 = count
                .parse()
                .with_context(|| format!("Invalid count in {}: {:?}", path.display(), line))?;

            table.counts.insert(word.to_string(), count);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_counts_occurrences() {
        let mut table = FrequencyTable::new();
        table.increment("the");
        table.increment("cat");
        table.increment("the");

        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.get("dog"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_finalize_sorts_by_count_descending() {
        let mut table = FrequencyTable::new();
        for word in ["one", "two", "two", "three", "three", "three"] {
            table.increment(word);
        }

        table.finalize();

        let words: Vec<&str> = table.iter().map(|(word, _)| word).collect();
        assert_eq!(words, vec!["three", "two", "one"]);
    }

    #[test]
    fn test_finalize_keeps_first_seen_order_on_ties() {
        let mut table = FrequencyTable::new();
        // "banana" is seen first, then "apple"; both end at count 1
        table.increment("banana");
        table.increment("apple");
        table.increment("zebra");
        table.increment("zebra");

        table.finalize();

        let words: Vec<&str> = table.iter().map(|(word, _)| word).collect();
        // zebra wins on count; banana stays ahead of apple despite the tie
        assert_eq!(words, vec!["zebra", "banana", "apple"]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut table = FrequencyTable::new();
        table.increment("the");
        table.increment("the");
        table.increment("cat");
        table.finalize();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        table.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "the:2\ncat:1\n");

        let loaded = FrequencyTable::load(&path).unwrap();
        assert_eq!(loaded.get("the"), 2);
        assert_eq!(loaded.get("cat"), 1);
        assert_eq!(loaded.len(), table.len());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrequencyTable::load(dir.path().join("nope.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "word-without-count\n").unwrap();

        assert!(FrequencyTable::load(&path).is_err());
    }

    #[test]
    fn test_load_requires_a_decimal_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colons.txt");
        // Split happens on the FIRST ':', so everything after it must
        // be a plain decimal number
        std::fs::write(&path, "hello:not-a-number\n").unwrap();

        assert!(FrequencyTable::load(&path).is_err());
    }

    #[test]
    fn test_top_respects_limit_and_threshold() {
        let mut table = FrequencyTable::new();
        for word in ["a", "a", "a", "b", "b", "c"] {
            table.increment(word);
        }

        let top = table.top(2, 0);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].word, "a");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].word, "b");

        // min_frequency is a strict threshold: count must be above it
        let frequent = table.top(10, 1);
        let words: Vec<&str> = frequent.iter().map(|entry| entry.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b"]);
    }
}
