//! Link matching and archive rewriting service.

use crate::domain::entities::{CandidateUrl, DomainSet, RewrittenLink};
use crate::error::AppError;
use crate::utils::flavor::random_phrase;
use crate::utils::url_extractor::find_candidate_urls;
use serde_json::json;

/// Default archive mirror prefix.
pub const DEFAULT_ARCHIVE_PREFIX: &str = "http://archive.ph/newest/";

/// Finds links to monitored domains in text and rewrites them with a prefix.
///
/// Rewriting is plain concatenation of the prefix and the link exactly as it
/// appeared in the text; the parsed URL is only used to read the host.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    prefix: String,
    flavor_text: bool,
}

impl LinkRewriter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            flavor_text: false,
        }
    }

    /// Enables a random accompanying phrase in [`Self::render_reply`].
    pub fn with_flavor_text(mut self, enabled: bool) -> Self {
        self.flavor_text = enabled;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rewrites every link in `text` whose host is in `domains`.
    ///
    /// Results keep the order of appearance; repeated links are repeated.
    /// Returns an empty vector when nothing matches.
    pub fn extract_and_rewrite(&self, text: &str, domains: &DomainSet) -> Vec<RewrittenLink> {
        if domains.is_empty() {
            return Vec::new();
        }

        find_candidate_urls(text)
            .filter(|candidate| domains.contains(candidate.host()))
            .map(|candidate| self.rewrite(candidate.raw()))
            .collect()
    }

    /// Rewrites `raw` unconditionally.
    pub fn rewrite(&self, raw: &str) -> RewrittenLink {
        RewrittenLink::new(&self.prefix, raw)
    }

    /// Validates a user supplied URL and rewrites it regardless of whether
    /// its host is monitored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `raw` is not an absolute HTTP(S) URL.
    pub fn archive(&self, raw: &str) -> Result<RewrittenLink, AppError> {
        let raw = raw.trim();
        CandidateUrl::parse(raw).map_err(|e| {
            AppError::bad_request("Invalid URL.", json!({ "url": raw, "reason": e.to_string() }))
        })?;

        Ok(self.rewrite(raw))
    }

    /// Formats rewritten links as a single chat reply, one link per line.
    ///
    /// With flavor text enabled, a random phrase goes on the first line.
    /// Returns `None` when there is nothing to send.
    pub fn render_reply(&self, links: &[RewrittenLink]) -> Option<String> {
        if links.is_empty() {
            return None;
        }

        let body = links
            .iter()
            .map(|link| link.rewritten.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if self.flavor_text {
            let phrase = random_phrase(&mut rand::rng());
            Some(format!("{phrase}\n{body}"))
        } else {
            Some(body)
        }
    }
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::flavor::FLAVOR_PHRASES;

    const PREFIX: &str = "https://archive.test/";

    fn domains(values: &[&str]) -> DomainSet {
        DomainSet::from_stored(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_urls_yields_nothing() {
        let rewriter = LinkRewriter::new(PREFIX);
        assert!(
            rewriter
                .extract_and_rewrite("hello there", &domains(&["example.com"]))
                .is_empty()
        );
        assert!(rewriter.extract_and_rewrite("", &domains(&["example.com"])).is_empty());
    }

    #[test]
    fn test_only_monitored_links_are_rewritten() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = rewriter.extract_and_rewrite(
            "check https://sub.example.com/a and http://other.org/b",
            &domains(&["example.com"]),
        );

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rewritten, "https://archive.test/https://sub.example.com/a");
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = rewriter.extract_and_rewrite(
            "https://b.com/1 https://a.com/2 https://x.org https://b.com/1",
            &domains(&["a.com", "b.com"]),
        );

        let originals: Vec<&str> = links.iter().map(|l| l.original.as_str()).collect();
        assert_eq!(originals, vec!["https://b.com/1", "https://a.com/2", "https://b.com/1"]);
    }

    #[test]
    fn test_original_text_is_preserved() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = rewriter.extract_and_rewrite(
            "HTTPS://WWW.Example.com/Some%20Path?Q=A#Frag",
            &domains(&["example.com"]),
        );

        assert_eq!(
            links[0].rewritten,
            "https://archive.test/HTTPS://WWW.Example.com/Some%20Path?Q=A#Frag"
        );
    }

    #[test]
    fn test_lookalike_domain_not_matched() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = rewriter.extract_and_rewrite(
            "https://fakeexample.com/x https://notexample.com",
            &domains(&["example.com"]),
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_candidate_does_not_abort_scan() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = rewriter.extract_and_rewrite(
            "http://[broken https://example.com/ok",
            &domains(&["example.com"]),
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].original, "https://example.com/ok");
    }

    #[test]
    fn test_empty_domain_set_matches_nothing() {
        let rewriter = LinkRewriter::new(PREFIX);
        assert!(
            rewriter
                .extract_and_rewrite("https://example.com", &DomainSet::new())
                .is_empty()
        );
    }

    #[test]
    fn test_archive_valid_url() {
        let rewriter = LinkRewriter::new(PREFIX);
        let link = rewriter.archive("https://unmonitored.org/page").unwrap();
        assert_eq!(link.rewritten, "https://archive.test/https://unmonitored.org/page");
    }

    #[test]
    fn test_archive_invalid_url() {
        let rewriter = LinkRewriter::new(PREFIX);
        let err = rewriter.archive("not a url").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Invalid URL.");

        assert!(rewriter.archive("ftp://example.com/file").is_err());
    }

    #[test]
    fn test_render_reply_joins_lines() {
        let rewriter = LinkRewriter::new(PREFIX);
        let links = vec![rewriter.rewrite("https://a.com"), rewriter.rewrite("https://b.com")];

        assert_eq!(
            rewriter.render_reply(&links).unwrap(),
            "https://archive.test/https://a.com\nhttps://archive.test/https://b.com"
        );
        assert!(rewriter.render_reply(&[]).is_none());
    }

    #[test]
    fn test_render_reply_with_flavor_text() {
        let rewriter = LinkRewriter::new(PREFIX).with_flavor_text(true);
        let links = vec![rewriter.rewrite("https://a.com")];

        let reply = rewriter.render_reply(&links).unwrap();
        let mut lines = reply.lines();

        assert!(FLAVOR_PHRASES.contains(&lines.next().unwrap()));
        assert_eq!(lines.next(), Some("https://archive.test/https://a.com"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(LinkRewriter::default().prefix(), "http://archive.ph/newest/");
    }
}
