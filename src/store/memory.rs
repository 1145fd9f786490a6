//! In-process [`RepoStore`] backed by a `HashMap`.
//!
//! Records live only as long as the process. Used by the HTTP tests and
//! selectable at startup with `STORE_BACKEND=memory`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{GitRepo, RepoStore, StoreError};

/// Map key: `(remote, branch)`.
type RepoKey = (String, String);

/// In-memory git repository store.
///
/// Reads share the lock; each create holds the write lock for its
/// existence check and insert, so concurrent duplicates are rejected.
#[derive(Debug, Default)]
pub struct MemoryRepoStore {
    repos: RwLock<HashMap<RepoKey, GitRepo>>,
}

impl MemoryRepoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.repos.read().await.len()
    }

    /// Returns `true` if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.repos.read().await.is_empty()
    }
}

#[async_trait]
impl RepoStore for MemoryRepoStore {
    async fn create(&self, repo: &GitRepo) -> Result<(), StoreError> {
        tracing::debug!(remote = %repo.remote, branch = %repo.branch, "creating git repo");

        let mut map = self.repos.write().await;
        match map.entry((repo.remote.clone(), repo.branch.clone())) {
            Entry::Occupied(_) => {
                tracing::debug!(repo = %repo, "git repo already exists");
                Err(StoreError::duplicate(repo))
            }
            Entry::Vacant(slot) => {
                slot.insert(repo.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, remote: &str, branch: &str) -> Result<GitRepo, StoreError> {
        tracing::debug!(remote, branch, "getting git repo from memory");

        let map = self.repos.read().await;
        map.get(&(remote.to_string(), branch.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(remote, branch))
    }

    async fn list(&self) -> Result<Vec<GitRepo>, StoreError> {
        tracing::debug!("getting git repos from memory");

        let map = self.repos.read().await;
        Ok(map.values().cloned().collect())
    }
}
