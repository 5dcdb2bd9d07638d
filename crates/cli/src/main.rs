//! Metrics page CLI
//!
//! Queries Prometheus for HTTP server request totals and writes them as a
//! static HTML table to `public/index.html`. Every option has a default, so
//! running the binary with no arguments performs the whole job.

mod output;

use anyhow::Result;
use clap::Parser;
use page_lib::config::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PROMETHEUS_URL, DEFAULT_QUERY, DEFAULT_REQUEST_TIMEOUT,
};
use page_lib::GeneratorConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Metrics page generator
#[derive(Parser)]
#[command(name = "metrics-page")]
#[command(author, version, about = "Render Prometheus request metrics as a static HTML page", long_about = None)]
pub struct Cli {
    /// Prometheus server URL
    #[arg(long, env = "METRICS_PAGE_PROMETHEUS_URL", default_value = DEFAULT_PROMETHEUS_URL)]
    pub prometheus_url: String,

    /// PromQL expression to query
    #[arg(long, env = "METRICS_PAGE_QUERY", default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Directory the page is written to
    #[arg(long, short, env = "METRICS_PAGE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, env = "METRICS_PAGE_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            prometheus_url: self.prometheus_url.clone(),
            query: self.query.clone(),
            output_dir: self.output_dir.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries only the status line
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = cli.generator_config();
    info!(
        prometheus_url = %config.prometheus_url,
        output = %config.output_path().display(),
        "Generating metrics page"
    );

    let summary = page_lib::generate(&config).await?;

    output::print_summary(&summary);

    Ok(())
}
