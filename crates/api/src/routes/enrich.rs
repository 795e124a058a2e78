use axum::routing::post;
use axum::Router;

use crate::handlers::enrich;
use crate::state::AppState;

/// Mount the enrichment relay routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enrich-company", post(enrich::enrich_company))
        .route("/enrich-company-async", post(enrich::enrich_company_async))
        .route("/enrich-lead", post(enrich::enrich_lead))
        .route("/find-email", post(enrich::find_email))
        .route("/find-phone", post(enrich::find_phone))
        .route("/qa-agent", post(enrich::qa_agent))
}
