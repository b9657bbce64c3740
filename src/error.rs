//! Crate-level error type.
//!
//! Each pipeline stage has its own `thiserror` enum next to its code; this
//! module aggregates them so the orchestrator and `main` deal with a single
//! type.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RightsizerError>;

/// Any failure the tool can report.
#[derive(Debug, Error)]
pub enum RightsizerError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("query error: {0}")]
    Query(#[from] crate::query::QueryError),

    #[error("prometheus error: {0}")]
    Prometheus(#[from] crate::prometheus::PrometheusError),

    #[error("template error: {0}")]
    Render(#[from] crate::render::RenderError),

    #[error("output error: {0}")]
    Output(#[from] crate::output::OutputError),

    /// One or more groups failed during an all-groups run.
    #[error("{0} group(s) failed, see log output")]
    GroupsFailed(usize),
}
