use crate::prometheus::DEFAULT_PROMETHEUS_URL;
use crate::runner::RunOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rightsizer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate right-sized Kubernetes resource configs from Prometheus usage history")]
#[command(
    long_about = "Queries a Prometheus-compatible backend for per-pod CPU and memory usage over a time window, computes percentile-based resource recommendations per workload group, and renders them into a configuration file through a Tera template."
)]
pub struct Cli {
    /// Path to the group configuration file
    #[arg(short, long, value_name = "FILE", default_value = "calc_config.yaml")]
    pub config: PathBuf,

    /// Run a single group instead of every group in the config
    #[arg(short, long, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Time window of usage history to aggregate (e.g. 1d, 12h, 7d)
    #[arg(short, long, value_name = "WINDOW", default_value = "1d")]
    pub time_to_parse: String,

    /// Write every group's rendered output to this path instead of the computed one
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Prometheus base URL (can also be set via PROMETHEUS_URL env var)
    #[arg(long, env = "PROMETHEUS_URL", default_value = DEFAULT_PROMETHEUS_URL)]
    pub prometheus_url: String,

    /// Template file rendered with the recommendations
    #[arg(long, value_name = "FILE", default_value = "resources.j2")]
    pub template: PathBuf,

    /// Print rendered output instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Collect the run options consumed by the orchestrator
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            namespace: self.namespace.clone(),
            window: self.time_to_parse.clone(),
            output_file: self.output_file.clone(),
            prometheus_url: self.prometheus_url.clone(),
            template: self.template.clone(),
            dry_run: self.dry_run,
        }
    }
}
