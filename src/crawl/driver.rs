// src/crawl/driver.rs
// =============================================================================
// This module implements the crawl loop itself.
//
// How it works:
// 1. Seed the frontier with the initial URLs
// 2. Pop the oldest URL and fetch it
// 3. On success: count its words, queue its same-domain links,
//    mark it visited
// 4. On failure: log a warning and move on (no retry, no visited mark)
// 5. Repeat until the frontier is empty
//
// The Crawler owns ALL crawl state (frontier, visited set, frequency
// table, base URL). Nothing lives in module-level statics, so separate
// Crawler instances are fully independent - tests can run them in
// parallel without stepping on each other.
//
// Exactly one fetch is in flight at a time. The loop awaits each fetch
// before touching the state again, so no locking is needed.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::Serialize;
use url::Url;

use super::classifier;
use super::frontier::{Frontier, VisitedSet};
use crate::extract::{collect_words, discover_links};
use crate::fetch::PageFetcher;
use crate::freq::FrequencyTable;

// Summary of a finished crawl
//
// #[derive(Serialize)] lets the CLI print this as JSON with --json
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CrawlReport {
    /// Pages fetched and processed successfully
    pub pages_crawled: usize,
    /// Fetches that failed (network error or non-success status)
    pub fetch_failures: usize,
    /// Distinct words in the frequency table
    pub distinct_words: usize,
    /// Total word occurrences counted
    pub total_words: u64,
}

// Crawls a website breadth-first, staying on the first seed's domain
//
// Generic over the PageFetcher so the HTTP client can be swapped for an
// in-memory fake in tests.
pub struct Crawler<F: PageFetcher> {
    fetcher: F,
    /// The first seed, parsed; defines the permitted scheme+host+port
    base: Url,
    frontier: Frontier,
    visited: VisitedSet,
    frequency: FrequencyTable,
    report: CrawlReport,
}

impl<F: PageFetcher> Crawler<F> {
    // Creates a crawler with its frontier pre-seeded
    //
    // The FIRST seed must parse - its authority becomes the base domain
    // for the whole crawl. Later seeds that fail to parse are skipped
    // with a warning. All parseable seeds are queued as given, even if
    // they are off the base domain; the domain rule only gates links
    // DISCOVERED during the crawl.
    pub fn new(seeds: &[String], fetcher: F) -> Result<Self> {
        let first = seeds
            .first()
            .ok_or_else(|| anyhow!("At least one seed URL is required"))?;

        let base = Url::parse(first)
            .with_context(|| format!("Invalid seed URL '{}'", first))?;

        let mut frontier = Frontier::new();
        for seed in seeds {
            match Url::parse(seed) {
                Ok(url) => {
                    frontier.push(url);
                }
                Err(e) => warn!("Skipping unparsable seed {}: {}", seed, e),
            }
        }

        Ok(Self {
            fetcher,
            base,
            frontier,
            visited: VisitedSet::new(),
            frequency: FrequencyTable::new(),
            report: CrawlReport::default(),
        })
    }

    // Runs the crawl to completion and returns the summary
    //
    // Terminates when the frontier is empty, i.e. when every reachable
    // same-domain page-like URL has been attempted. A site that mints
    // ever-new distinct paths can keep this going indefinitely; bounding
    // depth or time is deliberately not this layer's job.
    pub async fn run(&mut self) -> CrawlReport {
        while let Some(url) = self.frontier.pop() {
            match self.fetcher.fetch(&url).await {
                Ok(body) => self.process_page(&url, &body),
                Err(e) => {
                    // Dropped, not retried, not marked visited. If some
                    // later page links here again, it gets another shot.
                    warn!("Failed to fetch {}: {}", url, e);
                    self.report.fetch_failures += 1;
                }
            }
        }

        self.report.distinct_words = self.frequency.len();
        self.report.total_words = self.frequency.total();
        self.report
    }

    // Handles one successfully fetched page: words, then links, then
    // the visited mark
    fn process_page(&mut self, url: &Url, body: &str) {
        collect_words(body, &mut self.frequency);

        for candidate in discover_links(body, url) {
            if classifier::admit(&candidate, &self.base, &self.frontier, &self.visited) {
                self.frontier.push(candidate);
            }
        }

        self.visited.insert(url.clone());
        self.report.pages_crawled += 1;

        info!(
            "Processed {} ({} distinct words so far, {} queued)",
            url,
            self.frequency.len(),
            self.frontier.len()
        );
    }

    /// The accumulated frequency table
    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    /// Consumes the crawler and hands the table over for finalization
    pub fn into_frequency(self) -> FrequencyTable {
        self.frequency
    }
}
