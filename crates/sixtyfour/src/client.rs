//! REST client for the SixtyFour enrichment API.
//!
//! Wraps the remote HTTP surface (company/lead enrichment, email/phone
//! lookup, QA agent, job status) using [`reqwest`]. Every forwarded call
//! carries the configured API key as an `x-api-key` header; the key is
//! checked before any network I/O and never appears in responses or logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sft_core::JobStatus;

use crate::requests::{
    EnrichCompanyRequest, EnrichLeadRequest, FindEmailRequest, FindPhoneRequest, QaAgentRequest,
};

/// Keys left at this value by a copied `.env` template count as unset.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// HTTP client for the SixtyFour API.
pub struct SixtyFourClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Response returned by `/enrich-company-async` after queuing a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Server-assigned identifier for the queued task.
    pub task_id: String,
    /// Initial status of the task, usually `queued`.
    pub status: JobStatus,
}

/// Response returned by `/job-status/{task_id}`.
///
/// Extra fields are preserved so the relay can hand the upstream body back
/// to its caller unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusUpdate {
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Errors from the SixtyFour REST layer.
#[derive(Debug, thiserror::Error)]
pub enum SixtyFourApiError {
    /// No usable API key is configured; raised before any network I/O.
    #[error("SIXTYFOUR_API_KEY is not configured; set it in your environment or .env file")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote API returned a non-2xx status code.
    #[error("SixtyFour API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Upstream response body, kept as JSON for relaying.
        body: Value,
    },
}

impl SixtyFourClient {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://api.sixtyfour.ai`.
    /// * `api_key`  - Credential to attach to every call; empty strings and
    ///   the `.env` template placeholder are treated as unset.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .filter(|key| key != PLACEHOLDER_API_KEY);

        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Whether a usable API key is configured (reported by `/health`).
    pub fn api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Synchronous company enrichment. Returns the upstream body verbatim.
    pub async fn enrich_company(
        &self,
        request: &EnrichCompanyRequest,
    ) -> Result<Value, SixtyFourApiError> {
        self.post_json("/enrich-company", request).await
    }

    /// Fire-and-forget company enrichment.
    ///
    /// Returns the `task_id` the remote assigned plus its initial status;
    /// progress is then observed via [`Self::job_status`].
    pub async fn enrich_company_async(
        &self,
        request: &EnrichCompanyRequest,
    ) -> Result<SubmitResponse, SixtyFourApiError> {
        self.post_json("/enrich-company-async", request).await
    }

    /// Lead enrichment. Returns the upstream body verbatim.
    pub async fn enrich_lead(
        &self,
        request: &EnrichLeadRequest,
    ) -> Result<Value, SixtyFourApiError> {
        self.post_json("/enrich-lead", request).await
    }

    /// Email discovery for a lead. Returns the upstream body verbatim.
    pub async fn find_email(&self, request: &FindEmailRequest) -> Result<Value, SixtyFourApiError> {
        self.post_json("/find-email", request).await
    }

    /// Phone discovery for a lead. Returns the upstream body verbatim.
    pub async fn find_phone(&self, request: &FindPhoneRequest) -> Result<Value, SixtyFourApiError> {
        self.post_json("/find-phone", request).await
    }

    /// Question answering over enrichment context.
    pub async fn qa_agent(&self, request: &QaAgentRequest) -> Result<Value, SixtyFourApiError> {
        self.post_json("/qa-agent", request).await
    }

    /// Query the current status of an async task.
    ///
    /// Sends a `GET /job-status/{task_id}` request.
    pub async fn job_status(&self, task_id: &str) -> Result<JobStatusUpdate, SixtyFourApiError> {
        let api_key = self.require_api_key()?;

        let response = self
            .client
            .get(format!("{}/job-status/{}", self.base_url, task_id))
            .header("x-api-key", api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the configured key, or fail before any network I/O.
    fn require_api_key(&self) -> Result<&str, SixtyFourApiError> {
        self.api_key.as_deref().ok_or(SixtyFourApiError::MissingApiKey)
    }

    /// POST a JSON body to `{base_url}{path}` with the API key attached.
    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SixtyFourApiError> {
        let api_key = self.require_api_key()?;

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("x-api-key", api_key)
            .json(body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`SixtyFourApiError::Api`] carrying the
    /// status and (JSON-parsed when possible) body on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SixtyFourApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(SixtyFourApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SixtyFourApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
