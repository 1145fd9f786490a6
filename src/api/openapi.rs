//! OpenAPI document for the REST endpoints.
//!
//! Served at `/api-docs/openapi.json`; with the `swagger-ui` feature the
//! interactive UI is mounted at `/swagger-ui`.

use axum::Router;
use utoipa::OpenApi;

use super::dto::{
    GitTriggerRequest, GitTriggerResponse, PaginationMeta, RepoListResponse, TriggerStatus,
};
use super::handlers;
use crate::error::{ErrorBody, ErrorResponse};
use crate::store::GitRepo;

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI definition covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "trigger-gateway",
        description = "Webhook gateway that registers git repository triggers.",
        license(name = "MIT"),
    ),
    paths(
        handlers::system::root_handler,
        handlers::trigger::post_git_trigger,
        handlers::trigger::get_git_trigger,
        handlers::repos::list_repos,
    ),
    components(schemas(
        GitRepo,
        GitTriggerRequest,
        GitTriggerResponse,
        TriggerStatus,
        RepoListResponse,
        PaginationMeta,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Triggers", description = "Git webhook intake"),
        (name = "Repos", description = "Tracked repositories"),
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document (and Swagger UI when enabled).
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()),
    )
}

/// Routes serving the OpenAPI document (and Swagger UI when enabled).
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
