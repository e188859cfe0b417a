// src/extract/links.rs
// =============================================================================
// This module discovers links in HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative hrefs ("/docs",
// "../about") against the page they appeared on, the same way a
// browser does (RFC 3986).
//
// Note that this module does NOT decide which links are worth crawling.
// It reports every resolvable href; the crawl module's classifier is the
// single place where admission rules live. Schemes like mailto: resolve
// to URLs with no host and get rejected there.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Returns the literal href attribute values of all <a> anchors in `html`
//
// Anchors without an href are skipped. Values are returned exactly as
// written in the document - relative, absolute, fragments, whatever.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   result = ["/docs"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let mut hrefs = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }

    hrefs
}

// Extracts every anchor href from `html` and resolves it against
// `current_url`, the URL of the page the body came from
//
// Hrefs that fail to resolve are skipped without error.
//
// Examples (current_url = "https://example.com/page"):
//   href = "/docs" -> "https://example.com/docs"
//   href = "../other" -> "https://example.com/other"
//   href = "https://other.com" -> "https://other.com/"
pub fn discover_links(html: &str, current_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    for href in extract_hrefs(html) {
        // Url::join handles both relative and absolute hrefs
        match current_url.join(&href) {
            Ok(resolved) => links.push(resolved),
            Err(_) => continue, // Unresolvable href, skip it
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_literal_hrefs() {
        let html = r#"<a href="/docs">Docs</a> <a href="https://other.com">Other</a>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/docs", "https://other.com"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<a name="top">Top</a> <a href="/one">One</a>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/one"]);
    }

    #[test]
    fn test_resolve_root_relative_link() {
        let current = Url::parse("https://example.com/page").unwrap();
        let links = discover_links(r#"<a href="/docs">Docs</a>"#, &current);
        assert_eq!(links, vec![Url::parse("https://example.com/docs").unwrap()]);
    }

    #[test]
    fn test_resolve_path_relative_link() {
        let current = Url::parse("https://example.com/a/b/").unwrap();
        let links = discover_links(r#"<a href="../c">C</a>"#, &current);
        assert_eq!(links, vec![Url::parse("https://example.com/a/c").unwrap()]);
    }

    #[test]
    fn test_absolute_link_keeps_its_own_host() {
        let current = Url::parse("https://example.com/").unwrap();
        let links = discover_links(r#"<a href="https://other.com/x">X</a>"#, &current);
        assert_eq!(links, vec![Url::parse("https://other.com/x").unwrap()]);
    }

    #[test]
    fn test_mailto_resolves_to_hostless_url() {
        // The classifier rejects these later via the domain check;
        // here they simply resolve like any other href
        let current = Url::parse("https://example.com/").unwrap();
        let links = discover_links(r#"<a href="mailto:hi@example.com">Mail</a>"#, &current);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].scheme(), "mailto");
        assert!(links[0].host_str().is_none());
    }

    #[test]
    fn test_multiple_links_in_document_order() {
        let html = r#"
            <a href="https://example.com/one">One</a>
            <a href="/two">Two</a>
            <a href="three">Three</a>
        "#;
        let current = Url::parse("https://example.com/dir/").unwrap();
        let links = discover_links(html, &current);
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].as_str(), "https://example.com/dir/three");
    }
}
