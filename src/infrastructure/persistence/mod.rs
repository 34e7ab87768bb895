//! Storage implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`JsonFileDomainRepository`] - Monitored domain list in a JSON file

pub mod json_domain_repository;

pub use json_domain_repository::JsonFileDomainRepository;
