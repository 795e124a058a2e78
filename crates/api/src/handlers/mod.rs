//! HTTP request handlers.

pub mod enrich;
pub mod jobs;
