//! One generator run: fetch, render, write

use crate::config::GeneratorConfig;
use crate::fetcher::MetricsFetcher;
use crate::observability::PageLogger;
use crate::render::render;
use crate::writer::PageWriter;
use anyhow::Result;
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File that was written
    pub path: PathBuf,
    /// Data rows in the page
    pub samples: usize,
    /// Page size in bytes
    pub bytes: usize,
}

/// Query Prometheus and write the resulting page.
///
/// Fetch failures, including an unusable server URL, produce an empty
/// table. Only filesystem errors are returned.
pub async fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let logger = PageLogger::new(config.query.clone());

    let samples = match MetricsFetcher::from_config(config) {
        Ok(fetcher) => fetcher.fetch().await,
        Err(err) => {
            logger.log_fetch_failed(&config.prometheus_url, &err);
            Vec::new()
        }
    };

    let page = render(&samples);
    logger.log_page_rendered(page.row_count(), page.len());

    let path = PageWriter::new(&config.output_dir).write(&page)?;
    logger.log_page_written(&path, page.len());

    Ok(GenerationSummary {
        path,
        samples: page.row_count(),
        bytes: page.len(),
    })
}
