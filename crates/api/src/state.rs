use std::sync::Arc;

use sft_core::JobRegistry;
use sft_sixtyfour::{JobMonitor, SixtyFourClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Relay client for the remote SixtyFour API.
    pub client: Arc<SixtyFourClient>,
    /// In-memory view of all async jobs known to this session.
    pub registry: Arc<JobRegistry>,
    /// Per-job status polling loops.
    pub monitor: Arc<JobMonitor>,
}
