//! Domain entity representing a monitored hostname.

use serde_json::json;
use std::fmt;

use crate::error::AppError;
use crate::utils::url_normalizer::normalize_host;

/// A hostname whose links are automatically rewritten.
///
/// Stored in normalized form: lowercase, no leading `www.`, no scheme, no
/// path. A domain matches itself and every sub-domain of itself, so
/// monitoring `example.com` also covers `blog.example.com` but not
/// `notexample.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonitoredDomain(String);

impl MonitoredDomain {
    /// Normalizes and validates user input.
    ///
    /// # Validation
    ///
    /// - Must not be empty after normalization
    /// - Must be a bare hostname (no scheme, path, port or whitespace)
    /// - Internationalized names are stored in their ASCII (punycode) form
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is not a bare hostname.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let normalized = normalize_host(input);

        if normalized.is_empty() {
            return Err(AppError::bad_request(
                "Domain name must not be empty",
                json!({ "input": input }),
            ));
        }

        if normalized.contains("://") || normalized.contains('/') {
            return Err(AppError::bad_request(
                "Enter a bare domain such as example.com, not a URL",
                json!({ "input": input }),
            ));
        }

        let host = url::Host::parse(&normalized).map_err(|e| {
            AppError::bad_request(
                "Invalid domain name",
                json!({ "input": input, "reason": e.to_string() }),
            )
        })?;

        // IDNA mapping can reintroduce a `www.` label or a trailing dot.
        let domain = normalize_host(&host.to_string());
        if domain.is_empty() {
            return Err(AppError::bad_request(
                "Domain name must not be empty",
                json!({ "input": input }),
            ));
        }

        Ok(Self(domain))
    }

    /// Wraps a value read back from storage without validation.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the already normalized `host` equals this domain or
    /// ends with `"." + domain`.
    pub fn matches_host(&self, host: &str) -> bool {
        let domain = self.0.as_str();
        if domain.is_empty() || host.len() < domain.len() {
            return false;
        }
        if host.eq_ignore_ascii_case(domain) {
            return true;
        }

        let split = host.len() - domain.len();
        host.is_char_boundary(split)
            && host[split..].eq_ignore_ascii_case(domain)
            && host[..split].ends_with('.')
    }
}

impl fmt::Display for MonitoredDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of adding a domain to the monitored set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(MonitoredDomain),
    AlreadyPresent(MonitoredDomain),
}

/// Result of removing a domain from the monitored set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(MonitoredDomain),
    NotFound(MonitoredDomain),
}
