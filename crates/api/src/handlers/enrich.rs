//! Handlers for the enrichment relay endpoints.
//!
//! Each handler validates the one field the operation cannot work without,
//! then forwards the request to the remote API and hands the JSON reply
//! back unmodified. The async submission additionally registers the
//! returned task and starts its polling loop.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use sft_sixtyfour::requests::{
    EnrichCompanyRequest, EnrichLeadRequest, FindEmailRequest, FindPhoneRequest, QaAgentRequest,
};
use sft_sixtyfour::SubmitResponse;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Task type recorded for jobs submitted via the async company endpoint.
const TASK_TYPE_ENRICH_COMPANY: &str = "enrich_company";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a missing or blank required string field before any network call.
fn require_non_empty(value: Option<&str>, field: &str) -> AppResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

/// Reject a missing required JSON field before any network call.
fn require_present(value: Option<&Value>, field: &str) -> AppResult<()> {
    if value.is_some() {
        Ok(())
    } else {
        Err(AppError::Validation(format!("{field} is required")))
    }
}

// ---------------------------------------------------------------------------
// Synchronous relays
// ---------------------------------------------------------------------------

/// POST /api/enrich-company
pub async fn enrich_company(
    State(state): State<AppState>,
    Json(request): Json<EnrichCompanyRequest>,
) -> AppResult<Json<Value>> {
    require_non_empty(request.target_company.as_deref(), "target_company")?;

    let result = state.client.enrich_company(&request).await?;
    Ok(Json(result))
}

/// POST /api/enrich-lead
pub async fn enrich_lead(
    State(state): State<AppState>,
    Json(request): Json<EnrichLeadRequest>,
) -> AppResult<Json<Value>> {
    require_present(request.lead_info.as_ref(), "lead_info")?;

    let result = state.client.enrich_lead(&request).await?;
    Ok(Json(result))
}

/// POST /api/find-email
pub async fn find_email(
    State(state): State<AppState>,
    Json(request): Json<FindEmailRequest>,
) -> AppResult<Json<Value>> {
    require_present(request.lead.as_ref(), "lead")?;

    let result = state.client.find_email(&request).await?;
    Ok(Json(result))
}

/// POST /api/find-phone
pub async fn find_phone(
    State(state): State<AppState>,
    Json(request): Json<FindPhoneRequest>,
) -> AppResult<Json<Value>> {
    require_present(request.lead.as_ref(), "lead")?;

    let result = state.client.find_phone(&request).await?;
    Ok(Json(result))
}

/// POST /api/qa-agent
pub async fn qa_agent(
    State(state): State<AppState>,
    Json(request): Json<QaAgentRequest>,
) -> AppResult<Json<Value>> {
    require_non_empty(request.question.as_deref(), "question")?;

    let result = state.client.qa_agent(&request).await?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Async submission
// ---------------------------------------------------------------------------

/// POST /api/enrich-company-async
///
/// Relays the submission, registers the returned task in the job registry,
/// and starts its polling loop. Responds with `{task_id, status}`.
pub async fn enrich_company_async(
    State(state): State<AppState>,
    Json(request): Json<EnrichCompanyRequest>,
) -> AppResult<Json<SubmitResponse>> {
    require_non_empty(request.target_company.as_deref(), "target_company")?;

    let submitted = state.client.enrich_company_async(&request).await?;

    state
        .registry
        .register(
            &submitted.task_id,
            TASK_TYPE_ENRICH_COMPANY,
            submitted.status.clone(),
        )
        .await;
    state.monitor.start_monitoring(&submitted.task_id).await;

    tracing::info!(
        task_id = %submitted.task_id,
        status = %submitted.status,
        "Async enrichment submitted",
    );

    Ok(Json(submitted))
}
