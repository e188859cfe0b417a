// src/crawl/classifier.rs
// =============================================================================
// This module decides which discovered URLs get queued.
//
// A candidate is admitted to the frontier only if ALL of these hold:
// 1. It looks like a page: its path is empty or contains no '.'
//    (paths like /logo.png or /app.js are static assets, not pages)
// 2. It is not already waiting in the frontier
// 3. It was not already processed (visited)
// 4. It lives on the crawl's base domain: same scheme, host and port
//    as the first seed URL
//
// Rejection is silent - there is nothing to report or retry. Anything
// unparsable never even reaches this point, because href resolution
// already dropped it.
// =============================================================================

use super::frontier::{Frontier, VisitedSet};
use url::Url;

// Checks whether `url` is on the same authority as `base`
//
// Scheme, host and port must all match, so http://example.com,
// https://example.com and https://example.com:8443 are three
// different domains as far as the crawl is concerned.
pub fn same_authority(url: &Url, base: &Url) -> bool {
    url.scheme() == base.scheme() && url.host_str() == base.host_str() && url.port() == base.port()
}

// The "looks like a page" heuristic
//
// A path with a '.' in it almost always names a file with an extension
// (image.png, style.css, report.pdf) rather than a navigable page.
pub fn is_page_like(url: &Url) -> bool {
    let path = url.path();
    path.is_empty() || !path.contains('.')
}

// The full admission decision for one candidate URL
pub fn admit(url: &Url, base: &Url, frontier: &Frontier, visited: &VisitedSet) -> bool {
    is_page_like(url)
        && !frontier.contains(url)
        && !visited.contains(url)
        && same_authority(url, base)
}
