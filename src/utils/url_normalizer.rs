//! URL validation and hostname normalization utilities.
//!
//! Ensures that candidate links are absolute HTTP(S) URLs and that hostnames
//! are compared in a canonical form.

use url::Url;

/// Errors that can occur while validating a URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// The parsed value is only used for inspection (scheme, host). Callers that
/// render links keep the original input string.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] if the URL has no host.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_http_url("https://example.com/a").is_ok());
/// assert!(parse_http_url("ftp://example.com").is_err());
/// ```
pub fn parse_http_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

/// Brings a hostname into the form used for monitored-domain comparisons.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. A trailing dot (fully qualified form) is removed
/// 3. ASCII letters are lowercased
/// 4. One leading `www.` label is removed
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_host("WWW.Example.COM."), "example.com");
/// assert_eq!(normalize_host("blog.example.com"), "blog.example.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_suffix('.').unwrap_or(host);
    let lower = host.to_ascii_lowercase();

    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}
