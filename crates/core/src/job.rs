//! Async enrichment job model.
//!
//! A [`Job`] tracks one asynchronous task submitted to the remote system,
//! keyed by the opaque `task_id` the remote issued. The status vocabulary
//! is owned by the remote; anything we do not recognize is preserved
//! verbatim and treated as non-terminal.

use serde::{Deserialize, Serialize};

use crate::types::{TaskId, Timestamp};

/// Lifecycle status of an async job, as reported by the remote system.
///
/// Only `completed` and `failed` are terminal. Unknown values round-trip
/// through [`JobStatus::Other`] so a vocabulary change upstream degrades to
/// "keep polling" rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
    /// Any status string we do not recognize (non-terminal).
    Other(String),
}

impl JobStatus {
    /// True exactly for `completed` and `failed`; polling stops here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// The remote's wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Other(s) => s,
        }
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "queued" => JobStatus::Queued,
            "running" => JobStatus::Running,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Other(value),
        }
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        JobStatus::from(value.to_string())
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One asynchronous enrichment task known to this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier issued by the remote system; unique key.
    pub task_id: TaskId,
    /// Which operation was submitted (e.g. `enrich_company`).
    pub task_type: String,
    /// Last status observed from the remote.
    pub status: JobStatus,
    /// When the job was registered locally (UTC).
    pub submitted_at: Timestamp,
    /// Result payload, present only once the job completed.
    pub result: Option<serde_json::Value>,
}

impl Job {
    /// Create a freshly submitted job stamped with the current time.
    pub fn new(task_id: impl Into<TaskId>, task_type: impl Into<String>, status: JobStatus) -> Self {
        Self {
            task_id: task_id.into(),
            task_type: task_type.into(),
            status,
            submitted_at: chrono::Utc::now(),
            result: None,
        }
    }

    /// Merge a poll observation into the job, enforcing the lifecycle
    /// invariants: a terminal status is never regressed, and `result`
    /// transitions absent -> present at most once.
    ///
    /// Returns `true` if anything actually changed.
    pub fn apply(&mut self, status: JobStatus, result: Option<serde_json::Value>) -> bool {
        let mut changed = false;

        if self.status != status {
            if self.status.is_terminal() {
                tracing::debug!(
                    task_id = %self.task_id,
                    current = %self.status,
                    incoming = %status,
                    "Ignoring status change on terminal job",
                );
            } else {
                self.status = status;
                changed = true;
            }
        }

        if self.result.is_none() {
            if let Some(result) = result {
                self.result = Some(result);
                changed = true;
            }
        }

        changed
    }
}
