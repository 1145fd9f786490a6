//! System endpoints: root liveness/info.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::pipeline::RequestId;

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
struct RootResponse {
    service: &'static str,
    version: &'static str,
    status: &'static str,
    timestamp: String,
    request_id: String,
}

/// `GET /` — Service liveness and version info.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Liveness check",
    description = "Returns service name, version, current timestamp and the request's correlation ID.",
    responses(
        (status = 200, description = "Service is up", body = RootResponse),
    )
)]
pub async fn root_handler(request_id: RequestId) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            status: "ok",
            timestamp: Utc::now().to_rfc3339(),
            request_id: request_id.to_string(),
        }),
    )
}
