//! SixtyFour enrichment API integration.
//!
//! Provides the typed HTTP relay client ([`client::SixtyFourClient`]),
//! the request/response shapes for each enrichment operation, and the
//! per-job status polling machinery ([`monitor::JobMonitor`]).

pub mod client;
pub mod monitor;
pub mod requests;

pub use client::{JobStatusUpdate, SixtyFourApiError, SixtyFourClient, SubmitResponse};
pub use monitor::{JobMonitor, JobStatusSource, MonitorConfig};
