//! Link values flowing through the matcher: candidates found in text and
//! their rewritten forms.

use std::fmt;
use url::Url;

use crate::utils::url_normalizer::{UrlNormalizationError, parse_http_url};

/// A URL literal found in chat text that parsed as an absolute HTTP(S) URL.
///
/// Keeps the raw substring next to the parsed value: rendering always uses
/// the raw text, the parsed URL is only used to read the host.
#[derive(Debug, Clone)]
pub struct CandidateUrl<'a> {
    raw: &'a str,
    url: Url,
}

impl<'a> CandidateUrl<'a> {
    /// Parses a raw URL literal.
    ///
    /// # Errors
    ///
    /// Returns [`UrlNormalizationError`] if `raw` is not an absolute HTTP(S)
    /// URL with a host.
    pub fn parse(raw: &'a str) -> Result<Self, UrlNormalizationError> {
        let url = parse_http_url(raw)?;
        Ok(Self { raw, url })
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// A link rendered as `prefix + original text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLink {
    pub original: String,
    pub rewritten: String,
}

impl RewrittenLink {
    pub fn new(prefix: &str, original: &str) -> Self {
        Self {
            original: original.to_string(),
            rewritten: format!("{prefix}{original}"),
        }
    }
}

impl fmt::Display for RewrittenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rewritten)
    }
}
