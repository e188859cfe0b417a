// src/fetch/http.rs
// =============================================================================
// This module implements PageFetcher over real HTTP with reqwest.
//
// Behavior:
// - Plain GET per URL, one at a time (the driver is sequential)
// - 10 second timeout per request so a dead server can't hang the crawl
// - Any non-2xx status is reported as a fetch failure
//
// The client is built once and reused for every request, which gives us
// connection pooling for free.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::PageFetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let body = response.text().await?;
        Ok(body)
    }
}
