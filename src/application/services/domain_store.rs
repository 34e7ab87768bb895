//! Monitored domain store.

use crate::domain::entities::{AddOutcome, DomainSet, MonitoredDomain, RemoveOutcome};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_host;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the monitored domain list and keeps it in sync with its repository.
///
/// Every mutation holds the write lock until the repository has persisted
/// the new list, so other events see either the old or the new state. If
/// persisting fails the in-memory change is undone and the error returned.
pub struct DomainStore<R: DomainRepository> {
    repository: Arc<R>,
    domains: RwLock<DomainSet>,
}

impl<R: DomainRepository> DomainStore<R> {
    /// Loads the current list from `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store can be neither
    /// read nor recreated.
    pub async fn load(repository: Arc<R>) -> Result<Self, AppError> {
        let stored = repository.load().await?;
        let domains = DomainSet::from_stored(stored);

        Ok(Self {
            repository,
            domains: RwLock::new(domains),
        })
    }

    /// Adds a domain after normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is not a bare hostname.
    /// Returns [`AppError::Internal`] if the new list cannot be persisted.
    pub async fn add(&self, input: &str) -> Result<AddOutcome, AppError> {
        let domain = MonitoredDomain::parse(input)?;
        let mut domains = self.domains.write().await;

        if !domains.insert(domain.clone()) {
            return Ok(AddOutcome::AlreadyPresent(domain));
        }

        if let Err(e) = self.repository.save(&domains.to_strings()).await {
            domains.pop();
            return Err(e.into());
        }

        tracing::info!(domain = %domain, total = domains.len(), "Domain added");
        Ok(AddOutcome::Added(domain))
    }

    /// Removes a domain after normalizing it the same way as [`Self::add`].
    ///
    /// Input that fails hostname validation is still looked up in its
    /// normalized form, so entries edited into the file by hand can be
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the new list cannot be persisted.
    pub async fn remove(&self, input: &str) -> Result<RemoveOutcome, AppError> {
        let domain = MonitoredDomain::parse(input)
            .unwrap_or_else(|_| MonitoredDomain::from_stored(normalize_host(input)));
        let mut domains = self.domains.write().await;

        let Some(index) = domains.remove(&domain) else {
            return Ok(RemoveOutcome::NotFound(domain));
        };

        if let Err(e) = self.repository.save(&domains.to_strings()).await {
            domains.restore(index, domain);
            return Err(e.into());
        }

        tracing::info!(domain = %domain, total = domains.len(), "Domain removed");
        Ok(RemoveOutcome::Removed(domain))
    }

    /// Returns the monitored domains in insertion order.
    pub async fn list(&self) -> Vec<String> {
        self.domains.read().await.to_strings()
    }

    /// Returns true if `host` is a monitored domain or one of its sub-domains.
    pub async fn contains(&self, host: &str) -> bool {
        self.domains.read().await.contains(host)
    }

    /// Copies the current set for synchronous matching.
    pub async fn snapshot(&self) -> DomainSet {
        self.domains.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockDomainRepository, RepositoryError};

    fn repo_with(initial: Vec<&str>) -> MockDomainRepository {
        let initial: Vec<String> = initial.into_iter().map(String::from).collect();
        let mut mock_repo = MockDomainRepository::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(move || Ok(initial.clone()));
        mock_repo
    }

    #[tokio::test]
    async fn test_add_normalizes_and_persists() {
        let mut mock_repo = repo_with(vec![]);
        mock_repo
            .expect_save()
            .withf(|domains| domains.to_vec() == vec!["example.com".to_string()])
            .times(1)
            .returning(|_| Ok(()));

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let outcome = store.add("WWW.Example.com").await.unwrap();

        assert!(matches!(outcome, AddOutcome::Added(ref d) if d.as_str() == "example.com"));
        assert!(store.contains("example.com").await);
    }

    #[tokio::test]
    async fn test_add_existing_does_not_persist() {
        let mut mock_repo = repo_with(vec!["example.com"]);
        mock_repo.expect_save().times(0);

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let outcome = store.add("www.EXAMPLE.com").await.unwrap();

        assert!(matches!(outcome, AddOutcome::AlreadyPresent(_)));
        assert_eq!(store.list().await, vec!["example.com"]);
    }

    #[tokio::test]
    async fn test_add_invalid_input() {
        let mut mock_repo = repo_with(vec![]);
        mock_repo.expect_save().times(0);

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let result = store.add("https://example.com/page").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_rolls_back_when_save_fails() {
        let mut mock_repo = repo_with(vec!["a.com"]);
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Io("read-only file system".to_string())));

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let result = store.add("b.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
        assert_eq!(store.list().await, vec!["a.com"]);
        assert!(!store.contains("b.com").await);
    }

    #[tokio::test]
    async fn test_remove_existing() {
        let mut mock_repo = repo_with(vec!["a.com", "example.com", "c.com"]);
        mock_repo
            .expect_save()
            .withf(|domains| domains.to_vec() == vec!["a.com".to_string(), "c.com".to_string()])
            .times(1)
            .returning(|_| Ok(()));

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let outcome = store.remove("www.example.com").await.unwrap();

        assert!(matches!(outcome, RemoveOutcome::Removed(_)));
        assert!(!store.contains("example.com").await);
    }

    #[tokio::test]
    async fn test_remove_from_empty_store() {
        let mut mock_repo = repo_with(vec![]);
        mock_repo.expect_save().times(0);

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let outcome = store.remove("example.com").await.unwrap();

        assert!(matches!(outcome, RemoveOutcome::NotFound(ref d) if d.as_str() == "example.com"));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_rolls_back_when_save_fails() {
        let mut mock_repo = repo_with(vec!["a.com", "b.com", "c.com"]);
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Io("disk full".to_string())));

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        assert!(store.remove("b.com").await.is_err());

        assert_eq!(store.list().await, vec!["a.com", "b.com", "c.com"]);
    }

    #[tokio::test]
    async fn test_remove_hand_edited_entry() {
        let mut mock_repo = repo_with(vec!["odd entry"]);
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let store = DomainStore::load(Arc::new(mock_repo)).await.unwrap();
        let outcome = store.remove("Odd Entry").await.unwrap();

        assert!(matches!(outcome, RemoveOutcome::Removed(_)));
    }

    #[tokio::test]
    async fn test_contains_subdomain_policy() {
        let store = DomainStore::load(Arc::new(repo_with(vec!["example.com"])))
            .await
            .unwrap();

        assert!(store.contains("blog.example.com").await);
        assert!(!store.contains("notexample.com").await);
    }

    #[tokio::test]
    async fn test_load_failure_is_internal_error() {
        let mut mock_repo = MockDomainRepository::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(|| Err(RepositoryError::Io("permission denied".to_string())));

        let result = DomainStore::load(Arc::new(mock_repo)).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
