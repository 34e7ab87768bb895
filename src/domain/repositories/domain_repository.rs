//! Repository trait for the monitored domain list.

use async_trait::async_trait;

/// Errors raised by domain list storage backends.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(e: std::io::Error) -> Self {
        RepositoryError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Serialization(e.to_string())
    }
}

/// Storage for the ordered list of monitored domain names.
///
/// The repository only reads and writes whole lists; uniqueness and
/// normalization are enforced by [`crate::application::services::DomainStore`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileDomainRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Reads the stored list.
    ///
    /// A missing backing store is created empty. Content that cannot be
    /// read as a list of strings is replaced with an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Io`] if the backing store cannot be read
    /// or recreated.
    async fn load(&self) -> Result<Vec<String>, RepositoryError>;

    /// Replaces the stored list. Returns once the data is durable.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the list cannot be written.
    async fn save(&self, domains: &[String]) -> Result<(), RepositoryError>;
}
