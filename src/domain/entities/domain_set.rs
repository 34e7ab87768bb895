//! Ordered, duplicate-free collection of monitored domains.

use super::monitored_domain::MonitoredDomain;
use crate::utils::url_normalizer::normalize_host;

/// The monitored domains in insertion order.
///
/// Entries are unique. This is the value the link matcher consults; the
/// persistent owner is [`crate::application::services::DomainStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    domains: Vec<MonitoredDomain>,
}

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from values read back from storage.
    ///
    /// Values are kept verbatim; a repeated value keeps its first position.
    pub fn from_stored(values: Vec<String>) -> Self {
        let mut set = Self::new();
        for value in values {
            set.insert(MonitoredDomain::from_stored(value));
        }
        set
    }

    /// Returns true if `host` is monitored, either exactly or as a sub-domain.
    ///
    /// `host` is normalized first (lowercase, trailing dot and leading `www.`
    /// removed).
    pub fn contains(&self, host: &str) -> bool {
        let host = normalize_host(host);
        self.domains.iter().any(|d| d.matches_host(&host))
    }

    /// Returns true if exactly this domain is stored.
    pub fn contains_exact(&self, domain: &MonitoredDomain) -> bool {
        self.position(domain).is_some()
    }

    fn position(&self, domain: &MonitoredDomain) -> Option<usize> {
        self.domains
            .iter()
            .position(|d| d.as_str().eq_ignore_ascii_case(domain.as_str()))
    }

    /// Appends `domain` unless already present. Returns whether it was added.
    pub fn insert(&mut self, domain: MonitoredDomain) -> bool {
        if self.contains_exact(&domain) {
            return false;
        }
        self.domains.push(domain);
        true
    }

    /// Removes the first entry equal to `domain` and returns its former index.
    pub fn remove(&mut self, domain: &MonitoredDomain) -> Option<usize> {
        let index = self.position(domain)?;
        self.domains.remove(index);
        Some(index)
    }

    /// Puts a removed entry back at its former index.
    pub(crate) fn restore(&mut self, index: usize, domain: MonitoredDomain) {
        let index = index.min(self.domains.len());
        self.domains.insert(index, domain);
    }

    /// Drops the most recently appended entry.
    pub(crate) fn pop(&mut self) -> Option<MonitoredDomain> {
        self.domains.pop()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domain names in order, as persisted.
    pub fn to_strings(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.as_str().to_string()).collect()
    }
}
