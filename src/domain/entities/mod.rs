//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`MonitoredDomain`] - A normalized hostname whose links are rewritten
//! - [`DomainSet`] - The ordered, duplicate-free set of monitored domains
//! - [`CandidateUrl`] - A URL literal found in chat text
//! - [`RewrittenLink`] - A candidate rendered with the archive prefix
//!
//! Mutation results are reported as [`AddOutcome`] and [`RemoveOutcome`].

pub mod domain_set;
pub mod link;
pub mod monitored_domain;

pub use domain_set::DomainSet;
pub use link::{CandidateUrl, RewrittenLink};
pub use monitored_domain::{AddOutcome, MonitoredDomain, RemoveOutcome};
