//! Per-job status polling.
//!
//! [`JobMonitor`] drives each submitted async task from submission to a
//! terminal state by querying the remote status endpoint at a fixed
//! interval and feeding observations into the shared
//! [`JobRegistry`](sft_core::JobRegistry). One polling loop per task id;
//! every loop carries its own deadline and cancellation token, so stopping
//! one job never affects another.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use sft_core::registry::JobRegistry;
use sft_core::types::TaskId;

use crate::client::{JobStatusUpdate, SixtyFourApiError, SixtyFourClient};

/// Where a polling loop gets its status observations from.
///
/// [`SixtyFourClient`] is the production implementation; tests drive the
/// monitor with scripted sources instead of a live remote.
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    async fn job_status(&self, task_id: &str) -> Result<JobStatusUpdate, SixtyFourApiError>;
}

#[async_trait]
impl JobStatusSource for SixtyFourClient {
    async fn job_status(&self, task_id: &str) -> Result<JobStatusUpdate, SixtyFourApiError> {
        SixtyFourClient::job_status(self, task_id).await
    }
}

/// Tunable parameters for the polling loops.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Delay between consecutive status queries for one job.
    pub poll_interval: Duration,
    /// Wall-clock bound on one job's monitoring, measured from loop start.
    pub timeout: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(600),
        }
    }
}

/// Internal bookkeeping for a single monitored job.
struct MonitoredJob {
    task_handle: tokio::task::JoinHandle<()>,
    /// Per-job cancellation token (child of the master token).
    cancel: CancellationToken,
}

/// Manages one polling loop per async task.
///
/// Created once at application startup; the `Arc` is cheaply cloned into
/// request handlers.
pub struct JobMonitor {
    /// Active polling loops indexed by task id.
    jobs: RwLock<HashMap<TaskId, MonitoredJob>>,
    registry: Arc<JobRegistry>,
    source: Arc<dyn JobStatusSource>,
    config: MonitorConfig,
    /// Master cancellation token -- cancelled during shutdown.
    cancel: CancellationToken,
}

impl JobMonitor {
    /// Create a monitor that feeds observations into `registry`.
    pub fn new(
        registry: Arc<JobRegistry>,
        source: Arc<dyn JobStatusSource>,
        config: MonitorConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            jobs: RwLock::new(HashMap::new()),
            registry,
            source,
            config,
            cancel: CancellationToken::new(),
        })
    }

    /// Begin polling `task_id` until it reaches a terminal state, errors,
    /// times out, or is cancelled.
    ///
    /// Returns `false` without spawning anything when the id is blank or a
    /// loop for this id is already running -- duplicate loops would double
    /// the query rate against the remote API.
    pub async fn start_monitoring(&self, task_id: &str) -> bool {
        if task_id.trim().is_empty() {
            tracing::warn!("Ignoring monitoring request with empty task id");
            return false;
        }

        let mut jobs = self.jobs.write().await;
        if let Some(existing) = jobs.get(task_id) {
            if !existing.task_handle.is_finished() {
                tracing::debug!(task_id, "Already monitoring, ignoring duplicate request");
                return false;
            }
        }

        let cancel = self.cancel.child_token();
        let task_handle = tokio::spawn(poll_job(
            task_id.to_string(),
            Arc::clone(&self.registry),
            Arc::clone(&self.source),
            self.config.clone(),
            cancel.clone(),
        ));

        jobs.insert(
            task_id.to_string(),
            MonitoredJob {
                task_handle,
                cancel,
            },
        );

        true
    }

    /// Stop one job's polling loop. Returns `true` if a loop existed.
    ///
    /// Other jobs' loops are unaffected.
    pub async fn stop(&self, task_id: &str) -> bool {
        let Some(job) = self.jobs.write().await.remove(task_id) else {
            return false;
        };

        job.cancel.cancel();
        tracing::info!(task_id, "Job monitoring stopped");
        true
    }

    /// Whether a live polling loop exists for `task_id`.
    pub async fn is_monitoring(&self, task_id: &str) -> bool {
        self.jobs
            .read()
            .await
            .get(task_id)
            .is_some_and(|job| !job.task_handle.is_finished())
    }

    /// Number of polling loops that are still running.
    pub async fn active_count(&self) -> usize {
        self.jobs
            .read()
            .await
            .values()
            .filter(|job| !job.task_handle.is_finished())
            .count()
    }

    /// Gracefully shut down all polling loops.
    ///
    /// Cancels the master token, then waits up to 5 seconds per task for a
    /// clean exit.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down job monitor");
        self.cancel.cancel();

        let mut jobs = self.jobs.write().await;
        for (task_id, job) in jobs.drain() {
            let _ = tokio::time::timeout(Duration::from_secs(5), job.task_handle).await;
            tracing::debug!(task_id = %task_id, "Polling loop stopped");
        }

        tracing::info!("Job monitor shut down complete");
    }
}

/// Core polling loop for one task: wait, query, merge, repeat.
///
/// Waits one interval before the first query, and only schedules the next
/// wait after a response arrives, so queries for a single job never
/// overlap. Runs until a terminal status, a source error, the deadline, or
/// cancellation.
async fn poll_job(
    task_id: TaskId,
    registry: Arc<JobRegistry>,
    source: Arc<dyn JobStatusSource>,
    config: MonitorConfig,
    cancel: CancellationToken,
) {
    let deadline = tokio::time::sleep(config.timeout);
    tokio::pin!(deadline);

    tracing::info!(
        task_id = %task_id,
        poll_interval_ms = config.poll_interval.as_millis() as u64,
        "Job monitoring started",
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(task_id = %task_id, "Monitoring cancelled");
                return;
            }
            _ = &mut deadline => {
                tracing::info!(task_id = %task_id, "Monitoring window elapsed, giving up");
                return;
            }
            _ = tokio::time::sleep(config.poll_interval) => {}
        }

        let update = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(task_id = %task_id, "Monitoring cancelled");
                return;
            }
            _ = &mut deadline => {
                tracing::info!(task_id = %task_id, "Monitoring window elapsed, giving up");
                return;
            }
            result = source.job_status(&task_id) => match result {
                Ok(update) => update,
                Err(e) => {
                    // No retry: a testing tool is better off halting and
                    // letting the user re-check manually.
                    tracing::warn!(task_id = %task_id, error = %e, "Status query failed, halting loop");
                    return;
                }
            }
        };

        let terminal = update.status.is_terminal();
        registry
            .update(&task_id, update.status.clone(), update.result)
            .await;

        if terminal {
            tracing::info!(task_id = %task_id, status = %update.status, "Job reached terminal state");
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
