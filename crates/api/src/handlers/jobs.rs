//! Handlers for the tracked-job resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sft_core::{CoreError, Job};
use sft_sixtyfour::JobStatusUpdate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/job-status/{task_id}
///
/// Relays a manual status check to the remote. The observation is also fed
/// through the registry so a tracked job stays current even when its
/// polling loop has already halted; unknown ids pass straight through.
pub async fn job_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<JobStatusUpdate>> {
    let task_id = task_id.trim();
    if task_id.is_empty() {
        return Err(AppError::Validation("task_id is required".to_string()));
    }

    let update = state.client.job_status(task_id).await?;

    state
        .registry
        .update(task_id, update.status.clone(), update.result.clone())
        .await;

    Ok(Json(update))
}

/// GET /api/jobs
///
/// All jobs known to this session, in submission order.
pub async fn list_jobs(State(state): State<AppState>) -> Json<DataResponse<Vec<Job>>> {
    Json(DataResponse {
        data: state.registry.list().await,
    })
}

/// DELETE /api/jobs/{task_id}
///
/// Explicit user removal: stops the polling loop (if any) and drops the
/// job from the registry. 204 on success, 404 for unknown ids.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.monitor.stop(&task_id).await;

    if !state.registry.remove(&task_id).await {
        return Err(AppError::Core(CoreError::JobNotFound(task_id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
