//! Repository listing DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::store::GitRepo;

/// Response body for `GET /repos`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RepoListResponse {
    /// Tracked repositories on this page, ordered by remote then branch.
    pub data: Vec<GitRepo>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
