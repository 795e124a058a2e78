pub mod enrich;
pub mod events;
pub mod health;
pub mod jobs;

use axum::http::{Method, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /enrich-company               synchronous company enrichment (POST)
/// /enrich-company-async         fire-and-forget submission (POST)
/// /enrich-lead                  lead enrichment (POST)
/// /find-email                   email discovery (POST)
/// /find-phone                   phone discovery (POST)
/// /qa-agent                     question answering (POST)
///
/// /job-status/{task_id}         manual status check (GET)
/// /jobs                         tracked jobs in submission order (GET)
/// /jobs/{task_id}               remove a tracked job (DELETE)
///
/// /events                       SSE stream of registry changes (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(enrich::router())
        .merge(jobs::router())
        .merge(events::router())
}

/// Fallback for unrouted requests: JSON 404 instead of an empty body.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "details": format!("Route {method} {} not found", uri.path()),
        })),
    )
}
