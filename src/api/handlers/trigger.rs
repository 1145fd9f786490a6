//! Git trigger handlers: webhook intake and lookup.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::dto::{GitTriggerQuery, GitTriggerRequest, GitTriggerResponse, TriggerStatus};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};
use crate::pipeline::RequestId;
use crate::store::GitRepo;

/// `POST /triggers/git` — Register a git repository trigger.
///
/// A repeated registration of the same remote and branch is not an error:
/// it answers `200` with status `already_registered`.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for blank fields, or
/// [`ApiError::Store`] if the store fails.
#[utoipa::path(
    post,
    path = "/triggers/git",
    tag = "Triggers",
    summary = "Register a git trigger",
    description = "Records the remote and branch from a git webhook so the repository is tracked.",
    request_body = GitTriggerRequest,
    responses(
        (status = 201, description = "Repository registered", body = GitTriggerResponse),
        (status = 200, description = "Repository was already registered", body = GitTriggerResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn post_git_trigger(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(req): Json<GitTriggerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = req.into_repo()?;

    let (code, status) = match state.repo_store.create(&repo).await {
        Ok(()) => {
            tracing::info!(remote = %repo.remote, branch = %repo.branch, "registered git repo");
            (StatusCode::CREATED, TriggerStatus::Registered)
        }
        Err(e) if e.is_duplicate() => {
            tracing::info!(remote = %repo.remote, branch = %repo.branch, "git repo already registered");
            (StatusCode::OK, TriggerStatus::AlreadyRegistered)
        }
        Err(e) => return Err(e.into()),
    };

    let GitRepo { remote, branch } = repo;
    Ok((
        code,
        Json(GitTriggerResponse {
            remote,
            branch,
            status,
            request_id: request_id.to_string(),
        }),
    ))
}

/// `GET /triggers/git` — Look up a registered git trigger.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for blank parameters, or
/// [`ApiError::RepoNotFound`] if the pair is not registered. Parameters are
/// trimmed the same way as on registration.
#[utoipa::path(
    get,
    path = "/triggers/git",
    tag = "Triggers",
    summary = "Look up a git trigger",
    description = "Returns the tracked repository matching both the remote and the branch.",
    params(GitTriggerQuery),
    responses(
        (status = 200, description = "Registered repository", body = GitRepo),
        (status = 400, description = "Missing or blank parameter", body = ErrorResponse),
        (status = 404, description = "Not registered", body = ErrorResponse),
    )
)]
pub async fn get_git_trigger(
    State(state): State<AppState>,
    Query(query): Query<GitTriggerQuery>,
) -> Result<Json<GitRepo>, ApiError> {
    let key = query.into_key()?;
    let repo = state.repo_store.get(&key.remote, &key.branch).await?;
    Ok(Json(repo))
}
