// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "word-harvester",
    version = "0.1.0",
    about = "A CLI tool to crawl a website and build a word frequency table",
    long_about = "word-harvester crawls a website breadth-first from one or more seed URLs, \
                  stays on the first seed's domain, counts the English-looking words on every \
                  page it fetches, and saves the result as a word:count table sorted by frequency."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (crawl, top, sort)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and write a word frequency table
    ///
    /// Example: word-harvester crawl https://example.com --output words.txt
    Crawl {
        /// One or more seed URLs to start crawling from
        ///
        /// The domain of the FIRST seed decides which links are followed:
        /// anything on another scheme/host is skipped
        #[arg(required = true)]
        seed_urls: Vec<String>,

        /// File to write the sorted word:count table to
        ///
        /// One "word:count" record per line, most frequent word first
        #[arg(long, short, default_value = "words.txt")]
        output: String,

        /// Output the crawl summary in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent words from a saved table
    ///
    /// Example: word-harvester top words.txt --limit 10 --min-frequency 3
    Top {
        /// Path to a word:count table produced by the crawl subcommand
        file: String,

        /// How many entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Only show words whose count is above this threshold
        #[arg(long, default_value_t = 0)]
        min_frequency: u64,

        /// Output the entries in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Sort the lines of a text file alphabetically
    ///
    /// Example: word-harvester sort words.txt words_sorted.txt
    Sort {
        /// File to read lines from
        input: String,

        /// File to write the sorted lines to
        output: String,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "crawl OR top OR sort")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why Vec<String> for seed_urls?
//    - The user can pass several seeds: crawl https://a.com https://a.com/docs
//    - #[arg(required = true)] means at least one must be given
//
// 4. Where does the --help text come from?
//    - The /// doc comments on each field and variant
//    - clap turns them into the help output automatically
// -----------------------------------------------------------------------------
