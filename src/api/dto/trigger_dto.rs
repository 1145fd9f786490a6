//! Git trigger DTOs for register and lookup operations.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::store::GitRepo;

/// Request body for `POST /triggers/git`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GitTriggerRequest {
    /// URL or path of the repository.
    pub remote: String,
    /// Branch to track.
    pub branch: String,
}

impl GitTriggerRequest {
    /// Validates the request and converts it into a [`GitRepo`].
    ///
    /// Surrounding whitespace is trimmed from both fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if either field is blank.
    pub fn into_repo(self) -> Result<GitRepo, ApiError> {
        normalize(&self.remote, &self.branch)
    }
}

/// Query parameters for `GET /triggers/git`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GitTriggerQuery {
    /// URL or path of the repository.
    pub remote: String,
    /// Tracked branch.
    pub branch: String,
}

impl GitTriggerQuery {
    /// Normalizes the lookup key the same way [`GitTriggerRequest::into_repo`]
    /// normalizes a registration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if either parameter is blank.
    pub fn into_key(self) -> Result<GitRepo, ApiError> {
        normalize(&self.remote, &self.branch)
    }
}

/// Trims both fields and rejects blank ones.
fn normalize(remote: &str, branch: &str) -> Result<GitRepo, ApiError> {
    let remote = remote.trim();
    let branch = branch.trim();
    if remote.is_empty() {
        return Err(ApiError::InvalidRequest("remote must not be empty".to_string()));
    }
    if branch.is_empty() {
        return Err(ApiError::InvalidRequest("branch must not be empty".to_string()));
    }
    Ok(GitRepo::new(remote, branch))
}

/// Outcome of a git trigger registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    /// A new record was created.
    Registered,
    /// The remote and branch were already tracked.
    AlreadyRegistered,
}

/// Response body for `POST /triggers/git`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GitTriggerResponse {
    /// Repository remote.
    pub remote: String,
    /// Tracked branch.
    pub branch: String,
    /// Whether the record was newly created.
    pub status: TriggerStatus,
    /// Correlation identifier of the request.
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(remote: &str, branch: &str) -> GitTriggerRequest {
        GitTriggerRequest {
            remote: remote.to_string(),
            branch: branch.to_string(),
        }
    }

    #[test]
    fn valid_request_becomes_trimmed_repo() {
        let repo = request(" https://example.com/a.git ", "main\n").into_repo();
        assert!(matches!(repo, Ok(r) if r == GitRepo::new("https://example.com/a.git", "main")));
    }

    #[test]
    fn blank_remote_is_rejected() {
        assert!(matches!(
            request("  ", "main").into_repo(),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn blank_branch_is_rejected() {
        assert!(matches!(
            request("https://example.com/a.git", "").into_repo(),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn query_key_is_trimmed_like_the_body() {
        let query = GitTriggerQuery {
            remote: " https://example.com/a.git ".to_string(),
            branch: "\tmain".to_string(),
        };
        let body = request(" https://example.com/a.git ", "\tmain");
        assert_eq!(query.into_key().ok(), body.into_repo().ok());
    }

    #[test]
    fn blank_query_branch_is_rejected() {
        let query = GitTriggerQuery {
            remote: "r1".to_string(),
            branch: " ".to_string(),
        };
        assert!(matches!(query.into_key(), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_value(TriggerStatus::AlreadyRegistered).ok();
        assert_eq!(json, Some(serde_json::json!("already_registered")));
    }
}
