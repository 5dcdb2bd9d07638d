//! Metrics page library
//!
//! This crate provides the pieces behind the `metrics-page` binary:
//! - Querying the Prometheus HTTP API for a single expression
//! - Rendering the returned samples as a static HTML table
//! - Writing the page to the output directory
//! - Structured logging of each stage

pub mod config;
pub mod fetcher;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use config::GeneratorConfig;
pub use fetcher::{FetchError, MetricsFetcher};
pub use models::*;
pub use observability::PageLogger;
pub use pipeline::{generate, GenerationSummary};
pub use render::{render, RenderedPage};
pub use writer::PageWriter;
