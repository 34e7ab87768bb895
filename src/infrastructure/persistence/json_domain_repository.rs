use crate::domain::repositories::{DomainRepository, RepositoryError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Stores the monitored domain list as a JSON array in a single file.
///
/// Writes go to a sibling `*.tmp` file which is synced and then renamed
/// over the target, so readers never observe a half-written list.
pub struct JsonFileDomainRepository {
    path: PathBuf,
}

impl JsonFileDomainRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Flushes the directory entry so the rename survives a crash.
    #[cfg(unix)]
    async fn sync_parent(&self) -> Result<(), RepositoryError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        tokio::fs::File::open(parent).await?.sync_all().await?;
        Ok(())
    }

    // Directories cannot be opened as files on Windows.
    #[cfg(not(unix))]
    async fn sync_parent(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn reset(&self) -> Result<Vec<String>, RepositoryError> {
        self.save(&[]).await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl DomainRepository for JsonFileDomainRepository {
    async fn load(&self) -> Result<Vec<String>, RepositoryError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    "No existing domains file found, starting with an empty list"
                );
                return self.reset().await;
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<String>>(&contents) {
            Ok(domains) => {
                info!(
                    path = %self.path.display(),
                    count = domains.len(),
                    "Loaded monitored domains from disk"
                );
                Ok(domains)
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Domains file is malformed, resetting to an empty list"
                );
                self.reset().await
            }
        }
    }

    async fn save(&self, domains: &[String]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut body = serde_json::to_vec_pretty(domains)?;
        body.push(b'\n');

        let temp_path = self.temp_path();
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path).await?;
        self.sync_parent().await?;

        debug!(
            path = %self.path.display(),
            count = domains.len(),
            "Persisted monitored domains to disk"
        );
        Ok(())
    }
}
