//! Repository listing handler.

use axum::Json;
use axum::extract::{Query, State};

use crate::api::dto::{PaginationParams, RepoListResponse};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /repos` — List tracked repositories with pagination.
///
/// # Errors
///
/// Returns [`ApiError::Store`] if the store fails; no partial list is
/// returned.
#[utoipa::path(
    get,
    path = "/repos",
    tag = "Repos",
    summary = "List tracked repositories",
    description = "Returns a paginated list of every tracked remote and branch, ordered by remote then branch.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated repository list", body = RepoListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_repos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<RepoListResponse>, ApiError> {
    let mut repos = state.repo_store.list().await?;
    repos.sort();

    let (data, pagination) = params.paginate(repos);
    Ok(Json(RepoListResponse { data, pagination }))
}
