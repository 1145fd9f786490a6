//! Stored record types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracked git repository: a remote and one of its branches.
///
/// The `(remote, branch)` pair is the record's identity; the store holds at
/// most one record per pair.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema, sqlx::FromRow,
)]
pub struct GitRepo {
    /// URL or path identifying the repository.
    pub remote: String,
    /// Tracked branch name.
    pub branch: String,
}

impl GitRepo {
    /// Creates a record for `remote` at `branch`.
    #[must_use]
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }
}

impl std::fmt::Display for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.remote, self.branch)
    }
}
