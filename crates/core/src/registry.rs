//! In-memory job registry.
//!
//! [`JobRegistry`] is the authoritative view of every async job known to
//! this session. It is designed to be shared via `Arc<JobRegistry>` across
//! request handlers and polling loops; per-key updates are last-writer-wins
//! under a whole-map lock, which is sufficient because each `task_id` is
//! polled by exactly one loop.

use indexmap::IndexMap;
use tokio::sync::{broadcast, RwLock};

use crate::events::JobEvent;
use crate::job::{Job, JobStatus};
use crate::types::TaskId;

/// Default buffer capacity for the event broadcast channel.
const DEFAULT_EVENT_CAPACITY: usize = 256;

/// In-memory store of submitted async jobs, ordered by submission.
///
/// Mutations publish a [`JobEvent`] on a broadcast channel; zero
/// subscribers is fine. The registry holds no UI or HTTP references.
pub struct JobRegistry {
    jobs: RwLock<IndexMap<TaskId, Job>>,
    event_tx: broadcast::Sender<JobEvent>,
}

impl JobRegistry {
    /// Create a registry with a specific event channel capacity.
    pub fn new(event_capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(event_capacity);
        Self {
            jobs: RwLock::new(IndexMap::new()),
            event_tx,
        }
    }

    /// Subscribe to registry change events.
    pub fn subscribe(&self) -> broadcast::Receiver<JobEvent> {
        self.event_tx.subscribe()
    }

    /// Insert a new job, or overwrite an existing one with the same id.
    ///
    /// An empty `task_id` is a silent no-op; callers are expected to hold a
    /// valid id before registering. Re-submission under a known id resets
    /// `status` and `result` for the fresh attempt but keeps the original
    /// `task_type`, `submitted_at`, and position in the listing.
    pub async fn register(&self, task_id: &str, task_type: &str, status: JobStatus) {
        if task_id.trim().is_empty() {
            tracing::warn!("Ignoring register call with empty task id");
            return;
        }

        let mut jobs = self.jobs.write().await;
        let job = match jobs.entry(task_id.to_string()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.status = status;
                existing.result = None;
                existing.clone()
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(Job::new(task_id, task_type, status)).clone()
            }
        };
        drop(jobs);

        tracing::info!(task_id = %job.task_id, task_type = %job.task_type, "Job registered");
        self.publish(JobEvent::Registered {
            task_id: job.task_id,
            task_type: job.task_type,
            status: job.status,
        });
    }

    /// Merge a poll observation into a known job.
    ///
    /// Unknown ids are a no-op (the registry size never changes here).
    /// Terminal statuses are never regressed and `result` is write-once;
    /// see [`Job::apply`].
    pub async fn update(&self, task_id: &str, status: JobStatus, result: Option<serde_json::Value>) {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.get_mut(task_id) else {
            tracing::debug!(task_id, "Ignoring update for unknown job");
            return;
        };

        if !job.apply(status, result) {
            return;
        }
        let (status, has_result) = (job.status.clone(), job.result.is_some());
        drop(jobs);

        tracing::debug!(task_id, status = %status, has_result, "Job updated");
        self.publish(JobEvent::Updated {
            task_id: task_id.to_string(),
            status,
            has_result,
        });
    }

    /// Look up a single job by id.
    pub async fn get(&self, task_id: &str) -> Option<Job> {
        self.jobs.read().await.get(task_id).cloned()
    }

    /// All known jobs in submission (insertion) order.
    pub async fn list(&self) -> Vec<Job> {
        self.jobs.read().await.values().cloned().collect()
    }

    /// Remove a job by explicit user action. Returns `true` if it existed.
    pub async fn remove(&self, task_id: &str) -> bool {
        let removed = self.jobs.write().await.shift_remove(task_id).is_some();
        if removed {
            tracing::info!(task_id, "Job removed from registry");
            self.publish(JobEvent::Removed {
                task_id: task_id.to_string(),
            });
        }
        removed
    }

    /// Number of jobs currently tracked.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// True when no jobs are tracked.
    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }

    // ---- private helpers ----

    /// Publish an event, ignoring the error that means "no subscribers".
    fn publish(&self, event: JobEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
