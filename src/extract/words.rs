// src/extract/words.rs
// =============================================================================
// This module extracts words from raw page text.
//
// The rules are deliberately simple:
// - Split the text on whitespace
// - Keep a token only if EVERY character is an ASCII letter (a-z, A-Z)
// - Lower-case the token and count it
//
// The input is the raw page body, markup and all. Tokens that touch
// markup (like "<p>hello" or "world</p>") contain non-letter characters
// and fail the filter on their own, so no HTML stripping is needed here.
//
// Rust concepts:
// - Iterators: split_whitespace() yields tokens one at a time
// - char methods: is_ascii_alphabetic() checks a single character
// =============================================================================

use crate::freq::FrequencyTable;

// Collects words from `text` into `table`
//
// Parameters:
//   text: the raw page body (borrowed as &str)
//   table: the frequency table to update
//
// No return value - this only mutates the table.
//
// Example:
//   text = "The Cat sat on the Mat"
//   result: {the: 2, cat: 1, sat: 1, on: 1, mat: 1}
pub fn collect_words(text: &str, table: &mut FrequencyTable) {
    for token in text.split_whitespace() {
        // Digits, punctuation and non-ASCII scripts all disqualify a token
        if token.chars().all(|c| c.is_ascii_alphabetic()) {
            table.increment(&token.to_ascii_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_lower_cased_words() {
        let mut table = FrequencyTable::new();
        collect_words("The Cat sat on the Mat", &mut table);

        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.get("sat"), 1);
        assert_eq!(table.get("on"), 1);
        assert_eq!(table.get("mat"), 1);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_rejects_digits_and_punctuation() {
        let mut table = FrequencyTable::new();
        collect_words("hello world2 don't yes! ok", &mut table);

        assert_eq!(table.get("hello"), 1);
        assert_eq!(table.get("ok"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_rejects_non_ascii_words() {
        let mut table = FrequencyTable::new();
        collect_words("plain café слово word", &mut table);

        assert_eq!(table.get("plain"), 1);
        assert_eq!(table.get("word"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_markup_tokens_are_skipped() {
        let mut table = FrequencyTable::new();
        // Tokens glued to tags fail the letters-only filter; tokens
        // separated from the markup by whitespace still count
        collect_words("<p>intro text here </p>", &mut table);

        assert_eq!(table.get("intro"), 0);
        assert_eq!(table.get("text"), 1);
        assert_eq!(table.get("here"), 1);
    }

    #[test]
    fn test_empty_text_counts_nothing() {
        let mut table = FrequencyTable::new();
        collect_words("", &mut table);
        assert!(table.is_empty());
    }
}
