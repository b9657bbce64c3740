//! # Rightsizer CLI
//!
//! A Rust-based command-line tool that queries a Prometheus-compatible
//! metrics backend for per-pod CPU and memory usage over a time window,
//! computes percentile-based resource recommendations per workload, and
//! renders them into a configuration file through a Tera template.
//!
//! ## Features
//!
//! - **Usage-Driven Sizing**: Recommendations come from observed usage
//!   history, not guesswork
//! - **Percentile Selection**: Nearest-rank P90 over the sampled window,
//!   with a floor to avoid near-zero requests
//! - **Template Output**: Any Tera/Jinja2 template decides the final
//!   document syntax
//! - **Group Config**: Per-namespace label filters and pod exclusions in a
//!   single YAML file
//!
//! ## Example
//!
//! ```rust,no_run
//! use rightsizer::runner::{self, RunOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> rightsizer::Result<()> {
//! let opts = RunOptions::default();
//! runner::run(&opts).await?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod percentile;
pub mod prometheus;
pub mod query;
pub mod render;
pub mod runner;

// Re-export commonly used types and functions
pub use error::{Result, RightsizerError};
pub use percentile::Recommendation;
pub use prometheus::PrometheusClient;
pub use runner::RunOptions;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
