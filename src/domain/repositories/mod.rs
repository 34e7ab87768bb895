//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`DomainRepository`] - Monitored domain list storage

pub mod domain_repository;

pub use domain_repository::{DomainRepository, RepositoryError};

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
