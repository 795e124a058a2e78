//! Registry change events.
//!
//! Published on the registry's broadcast channel whenever a job is
//! registered, effectively updated, or removed, so that presentation
//! layers (SSE subscribers) can refresh without the registry knowing
//! anything about them.

use serde::Serialize;

use crate::job::JobStatus;
use crate::types::TaskId;

/// A registry mutation worth telling subscribers about.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobEvent {
    /// A new job entered the registry (or an id was re-submitted).
    Registered {
        task_id: TaskId,
        task_type: String,
        status: JobStatus,
    },

    /// A poll observation changed a job's status and/or set its result.
    Updated {
        task_id: TaskId,
        status: JobStatus,
        /// True once the result payload is available.
        has_result: bool,
    },

    /// A job was removed by explicit user action.
    Removed { task_id: TaskId },
}
