use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current server time (RFC 3339, UTC).
    pub timestamp: String,
    /// Whether a usable SixtyFour API key is configured.
    #[serde(rename = "apiKeyConfigured")]
    pub api_key_configured: bool,
}

/// GET /health -- returns service health and credential configuration.
///
/// Always 200; a missing API key shows up as `apiKeyConfigured: false`
/// rather than an error, so the UI can warn before the first relay call.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        api_key_configured: state.client.api_key_configured(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
