use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Mount the tracked-job routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/job-status/{task_id}", get(jobs::job_status))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/{task_id}", delete(jobs::delete_job))
}
