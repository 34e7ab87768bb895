//! Link extraction from free-form chat text.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::CandidateUrl;

/// An `http`/`https` scheme followed by a run of non-whitespace, non-`<` characters.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s<]+").expect("valid URL pattern"));

/// Lazily scans `text` left-to-right for URL-looking substrings.
///
/// Matches are maximal and non-overlapping. Duplicate occurrences are
/// yielded once per occurrence. Nothing is validated at this stage.
pub fn find_url_literals(text: &str) -> impl Iterator<Item = &str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Like [`find_url_literals`], but keeps only substrings that parse as
/// absolute HTTP(S) URLs with a host. Malformed candidates are skipped.
pub fn find_candidate_urls(text: &str) -> impl Iterator<Item = CandidateUrl<'_>> {
    find_url_literals(text).filter_map(|raw| CandidateUrl::parse(raw).ok())
}
