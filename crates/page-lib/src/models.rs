//! Data models for the Prometheus query API and the rendered table

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder used when a sample is missing a label
pub const UNKNOWN_LABEL: &str = "unknown";

/// Label carrying the reporting service
pub const JOB_LABEL: &str = "job";

/// Label carrying the metric name
pub const NAME_LABEL: &str = "__name__";

/// Envelope returned by `GET /api/v1/query`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "errorType")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<QueryData>,
}

impl QueryResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

/// The `data` section of a query response
#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    pub result: Vec<ResultEntry>,
}

/// One instant-vector element: a label set and a `[timestamp, value]` pair
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub metric: BTreeMap<String, String>,
    pub value: (Value, Value),
}

/// One row of the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub job: String,
    pub metric_name: String,
    pub value: String,
}

impl MetricSample {
    pub fn new(
        job: impl Into<String>,
        metric_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            job: job.into(),
            metric_name: metric_name.into(),
            value: value.into(),
        }
    }
}

impl From<ResultEntry> for MetricSample {
    fn from(entry: ResultEntry) -> Self {
        let label = |name: &str| {
            entry
                .metric
                .get(name)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
        };

        Self {
            job: label(JOB_LABEL),
            metric_name: label(NAME_LABEL),
            // The timestamp half of the pair is not displayed
            value: match entry.value.1 {
                Value::String(value) => value,
                other => other.to_string(),
            },
        }
    }
}
