//! Prometheus query client
//!
//! [`MetricsFetcher::query`] performs the single instant query and reports
//! every failure as a [`FetchError`]. [`MetricsFetcher::fetch`] is the
//! fail-soft entry point used by the generator: errors are logged and the
//! page is rendered from an empty sample list instead.

use crate::config::{GeneratorConfig, QUERY_PATH};
use crate::models::{MetricSample, QueryResponse};
use crate::observability::PageLogger;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors raised while querying Prometheus
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid Prometheus URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Prometheus returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("query rejected ({error_type}): {error}")]
    Api { error_type: String, error: String },

    #[error("response has no data section")]
    MissingData,
}

/// Client for the Prometheus instant-query endpoint
pub struct MetricsFetcher {
    client: Client,
    endpoint: Url,
    query: String,
    logger: PageLogger,
}

impl MetricsFetcher {
    /// Create a fetcher for `query` against the server at `base_url`
    pub fn new(
        base_url: &str,
        query: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        let endpoint = query_endpoint(base_url).map_err(|source| FetchError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let query = query.into();
        let logger = PageLogger::new(query.clone());

        Ok(Self {
            client,
            endpoint,
            query,
            logger,
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.prometheus_url,
            config.query.clone(),
            config.request_timeout,
        )
    }

    /// Query endpoint URL, without the `query` parameter
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run the query, returning the samples in response order
    pub async fn query(&self) -> Result<Vec<MetricSample>, FetchError> {
        self.logger.log_fetch_started(self.endpoint.as_str());

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", self.query.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prometheus reports bad queries with a JSON error envelope
            if let Ok(envelope) = serde_json::from_str::<QueryResponse>(&body) {
                if envelope.is_error() {
                    return Err(api_error(envelope));
                }
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }

    /// Run the query, degrading any failure to an empty sample list
    pub async fn fetch(&self) -> Vec<MetricSample> {
        match self.query().await {
            Ok(samples) => {
                self.logger.log_fetch_completed(samples.len());
                samples
            }
            Err(err) => {
                self.logger.log_fetch_failed(self.endpoint.as_str(), &err);
                Vec::new()
            }
        }
    }
}

/// Append the query path to the server URL, keeping any route prefix
fn query_endpoint(base_url: &str) -> Result<Url, url::ParseError> {
    let mut endpoint = Url::parse(base_url)?;
    endpoint
        .path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(QUERY_PATH.split('/'));
    Ok(endpoint)
}

/// Decode a query response body into table samples
pub fn parse_response(body: &str) -> Result<Vec<MetricSample>, FetchError> {
    let response: QueryResponse = serde_json::from_str(body)?;

    if response.is_error() {
        return Err(api_error(response));
    }

    let data = response.data.ok_or(FetchError::MissingData)?;
    Ok(data.result.into_iter().map(MetricSample::from).collect())
}

fn api_error(response: QueryResponse) -> FetchError {
    FetchError::Api {
        error_type: response.error_type.unwrap_or_else(|| "unknown".to_string()),
        error: response.error.unwrap_or_default(),
    }
}
