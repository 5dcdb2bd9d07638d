//! Structured logging for generator runs
//!
//! Every stage emits one event carrying an `event` field so runs can be
//! followed in plain text or JSON output alike.

use std::fmt::Display;
use std::path::Path;
use tracing::{debug, error, info};

/// Structured logger for fetch, render and write events
#[derive(Clone)]
pub struct PageLogger {
    query: String,
}

impl PageLogger {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Log the outbound query
    pub fn log_fetch_started(&self, endpoint: &str) {
        debug!(
            event = "fetch_started",
            query = %self.query,
            endpoint = %endpoint,
            "Querying Prometheus"
        );
    }

    /// Log a successful query
    pub fn log_fetch_completed(&self, samples: usize) {
        info!(
            event = "fetch_completed",
            query = %self.query,
            samples = samples,
            "Fetched metric samples"
        );
    }

    /// Log a failed query; the page falls back to an empty table
    pub fn log_fetch_failed(&self, endpoint: &str, err: &dyn Display) {
        error!(
            event = "fetch_failed",
            query = %self.query,
            endpoint = %endpoint,
            error = %err,
            "Error fetching metrics: {}",
            err
        );
    }

    /// Log the rendered document size
    pub fn log_page_rendered(&self, rows: usize, bytes: usize) {
        debug!(
            event = "page_rendered",
            query = %self.query,
            rows = rows,
            bytes = bytes,
            "Rendered metrics page"
        );
    }

    /// Log the written output file
    pub fn log_page_written(&self, path: &Path, bytes: usize) {
        info!(
            event = "page_written",
            query = %self.query,
            path = %path.display(),
            bytes = bytes,
            "Wrote metrics page"
        );
    }
}
