//! Store error taxonomy.
//!
//! Every [`super::RepoStore`] implementation reports failures through
//! [`StoreError`]. Errors from the database driver are kept as the source
//! and annotated with the operation and key that failed.

use super::GitRepo;

/// Errors returned by [`super::RepoStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The initial connection to the database could not be established.
    #[error("unable to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A record with the same remote and branch already exists.
    #[error("git repo {remote}#{branch} already exists")]
    DuplicateKey {
        /// Remote of the rejected record.
        remote: String,
        /// Branch of the rejected record.
        branch: String,
    },

    /// No record matches the requested remote and branch.
    #[error("git repo {remote}#{branch} not found")]
    NotFound {
        /// Requested remote.
        remote: String,
        /// Requested branch.
        branch: String,
    },

    /// Any other statement execution or row decoding failure.
    #[error("{context}: {source}")]
    Query {
        /// What was being attempted when the statement failed.
        context: String,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Builds a [`StoreError::DuplicateKey`] for `repo`.
    #[must_use]
    pub fn duplicate(repo: &GitRepo) -> Self {
        Self::DuplicateKey {
            remote: repo.remote.clone(),
            branch: repo.branch.clone(),
        }
    }

    /// Builds a [`StoreError::NotFound`] for the given key.
    #[must_use]
    pub fn not_found(remote: &str, branch: &str) -> Self {
        Self::NotFound {
            remote: remote.to_string(),
            branch: branch.to_string(),
        }
    }

    /// Returns `true` for [`StoreError::DuplicateKey`].
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns `true` for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
