// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print results as a table or JSON
// 4. Exit with proper code (0 = success, 1 = fetch failures, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl blocks on network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod crawl;     // src/crawl/ - frontier, classifier and crawl loop
mod extract;   // src/extract/ - word counting and link discovery
mod fetch;     // src/fetch/ - the PageFetcher trait and its HTTP impl
mod freq;      // src/freq/ - the word frequency table
mod sort;      // src/sort.rs - generic line-sorting utility

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // RUST_LOG controls what the engine logs (e.g. RUST_LOG=info)
    env_logger::init();

    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e); // {:#} also prints the error's cause chain
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = success
//   Ok(1) = crawl finished but some fetches failed
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Crawl {
            seed_urls,
            output,
            json,
        } => handle_crawl(&seed_urls, &output, json).await,
        Commands::Top {
            file,
            limit,
            min_frequency,
            json,
        } => handle_top(&file, limit, min_frequency, json),
        Commands::Sort { input, output } => handle_sort(&input, &output),
    }
}

// Handles the 'crawl' subcommand
// Parameters:
//   seed_urls: where the crawl starts; the first one fixes the domain
//   output: path for the word:count table
//   json: whether to output the summary as JSON
async fn handle_crawl(seed_urls: &[String], output: &str, json: bool) -> Result<i32> {
    println!("🔍 Crawling {} (same-domain only)", seed_urls[0]);

    // The real HTTP fetcher; tests use an in-memory one instead
    let fetcher = fetch::HttpFetcher::new()?;
    let mut crawler = crawl::Crawler::new(seed_urls, fetcher)?;

    // Drives the whole crawl to completion, one fetch at a time
    let report = crawler.run().await;

    // Sort by frequency (stable on ties) and persist
    let mut table = crawler.into_frequency();
    table.finalize();
    table.save(output)?;

    println!("💾 Wrote {} words to {}\n", report.distinct_words, output);

    if json {
        // Serialize the summary to JSON and print
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    // Fetch failures don't abort the crawl, but they do flag the exit code
    if report.fetch_failures > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'top' subcommand
// Reads a previously saved table and shows its most frequent entries
fn handle_top(file: &str, limit: usize, min_frequency: u64, json: bool) -> Result<i32> {
    let table = freq::FrequencyTable::load(file)?;
    let entries = table.top(limit, min_frequency);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(0);
    }

    if entries.is_empty() {
        println!("No words with a count above {} in {}", min_frequency, file);
        return Ok(0);
    }

    // Print a human-readable table
    println!("{:<30} {:<10}", "WORD", "COUNT");
    println!("{}", "=".repeat(40));
    for entry in &entries {
        println!("{:<30} {:<10}", entry.word, entry.count);
    }

    Ok(0)
}

// Handles the 'sort' subcommand
fn handle_sort(input: &str, output: &str) -> Result<i32> {
    let count = sort::sort_lines(input, output)?;
    println!("✅ Sorted {} line(s) from {} into {}", count, input, output);
    Ok(0)
}

// Prints the crawl summary as a human-readable block
fn print_report(report: &crawl::CrawlReport) {
    println!("📊 Summary:");
    println!("   📄 Pages crawled: {}", report.pages_crawled);
    println!("   ⚠️  Fetch failures: {}", report.fetch_failures);
    println!("   🔤 Distinct words: {}", report.distinct_words);
    println!("   📋 Total words: {}", report.total_words);
}
