//! Shared application state bound into every terminal handler.

use std::sync::Arc;

use crate::store::RepoStore;

/// Shared application state available to terminal handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage for tracked git repositories.
    pub repo_store: Arc<dyn RepoStore>,
}

impl AppState {
    /// Creates state around the process-wide store handle.
    #[must_use]
    pub fn new(repo_store: Arc<dyn RepoStore>) -> Self {
        Self { repo_store }
    }
}
