// src/fetch/mod.rs
// =============================================================================
// This module defines how pages are retrieved.
//
// The crawl engine never talks to reqwest directly - it only knows the
// PageFetcher trait below. That keeps the network at the edge of the
// program: the real crawl uses HttpFetcher, while tests plug in a fake
// that serves pages from a HashMap.
//
// Rust concepts:
// - Traits: An interface the crawler depends on instead of a concrete type
// - async-trait: Allows async functions inside a trait
// =============================================================================

mod http;

pub use http::HttpFetcher;

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

// The narrow interface the crawl driver consumes
//
// fetch() returns the decoded page body, or an error for anything that
// should count as a fetch failure (network trouble, non-success status).
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String>;
}
