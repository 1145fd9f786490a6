//! REST API layer: terminal handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Every business route is served by a [`Pipeline`] that runs the request
//! ID stage, then the logging stage, then the route's handler.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::routing::get_service;
use tower_http::catch_panic::CatchPanicLayer;

use crate::app_state::AppState;
use crate::pipeline::{Pipeline, terminal};

pub use openapi::ApiDoc;

/// Builds the complete router with all endpoints.
///
/// | Method | Path            | Handler                            |
/// |--------|-----------------|------------------------------------|
/// | GET    | `/`             | [`handlers::system::root_handler`] |
/// | POST   | `/triggers/git` | [`handlers::trigger::post_git_trigger`] |
/// | GET    | `/triggers/git` | [`handlers::trigger::get_git_trigger`] |
/// | GET    | `/repos`        | [`handlers::repos::list_repos`]    |
///
/// Panics raised while serving a request are turned into `500` responses.
pub fn build_router(state: AppState) -> Router {
    let root = Pipeline::traced(terminal(handlers::system::root_handler, state.clone()));
    let post_trigger =
        Pipeline::traced(terminal(handlers::trigger::post_git_trigger, state.clone()));
    let get_trigger =
        Pipeline::traced(terminal(handlers::trigger::get_git_trigger, state.clone()));
    let list_repos = Pipeline::traced(terminal(handlers::repos::list_repos, state));

    let router = Router::new()
        .route("/", get_service(root))
        .route(
            "/triggers/git",
            get_service(get_trigger).post_service(post_trigger),
        )
        .route("/repos", get_service(list_repos))
        .merge(openapi::routes());

    recover_panics(router)
}

/// Converts a panic in any route into a `500` response for that request.
fn recover_panics(router: Router) -> Router {
    router.layer(CatchPanicLayer::new())
}
