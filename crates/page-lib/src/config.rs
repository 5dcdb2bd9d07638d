//! Generator configuration

use std::path::PathBuf;
use std::time::Duration;

/// Prometheus server queried when nothing else is configured
pub const DEFAULT_PROMETHEUS_URL: &str = "http://localhost:9090";

/// Instant-query endpoint, relative to the server URL
pub const QUERY_PATH: &str = "api/v1/query";

/// Expression sent as the `query` parameter
pub const DEFAULT_QUERY: &str = "http_server_requests_seconds_sum";

/// Directory the page is written into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// File name of the generated page
pub const INDEX_FILE: &str = "index.html";

/// Upper bound on the whole HTTP exchange
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a single generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the Prometheus server
    pub prometheus_url: String,

    /// PromQL expression to evaluate
    pub query: String,

    /// Directory receiving `index.html`
    pub output_dir: PathBuf,

    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prometheus_url: DEFAULT_PROMETHEUS_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl GeneratorConfig {
    /// Full path of the generated page
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }
}
