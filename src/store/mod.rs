//! Persistence for tracked git repositories.
//!
//! [`RepoStore`] is the storage capability used by the HTTP handlers. Two
//! implementations exist:
//!
//! - [`PostgresRepoStore`] persists records in the `git_repos` table through
//!   a shared `sqlx::PgPool`.
//! - [`MemoryRepoStore`] keeps records in process memory, for tests and
//!   local runs.
//!
//! Both enforce one record per `(remote, branch)` pair and report failures
//! through the same [`StoreError`] variants.

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;

#[cfg(test)]
pub(crate) mod contract;

use std::fmt;

use async_trait::async_trait;

pub use error::StoreError;
pub use memory::MemoryRepoStore;
pub use models::GitRepo;
pub use postgres::PostgresRepoStore;

/// Create/get/list access to [`GitRepo`] records.
#[async_trait]
pub trait RepoStore: Send + Sync + fmt::Debug {
    /// Persists `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a record with the same remote
    /// and branch exists, or [`StoreError::Query`] on any other failure.
    async fn create(&self, repo: &GitRepo) -> Result<(), StoreError>;

    /// Returns the record for `remote` at `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches, or
    /// [`StoreError::Query`] on any other failure.
    async fn get(&self, remote: &str, branch: &str) -> Result<GitRepo, StoreError>;

    /// Returns every record, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the records cannot be read. No
    /// partial results are returned alongside an error.
    async fn list(&self) -> Result<Vec<GitRepo>, StoreError>;
}
