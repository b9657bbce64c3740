//! Per-group pipeline and the all-groups run.
//!
//! Each group is processed independently with freshly built local data:
//! build queries, fetch cpu and memory usage, aggregate, drop excluded pod
//! keys, compute recommendations, render, write. Groups run sequentially;
//! a failed group is logged and the run continues with the next one.

use crate::config::{self, CalcConfig};
use crate::error::{Result, RightsizerError};
use crate::prometheus::{self, PrometheusClient};
use crate::query;
use crate::render;
use crate::{aggregate, output, percentile};
use std::path::PathBuf;

/// Everything a run needs, collected once at startup and passed down.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Group configuration file.
    pub config_path: PathBuf,

    /// Run this single group; `None` runs every group in the config.
    pub namespace: Option<String>,

    /// Time window of usage history (e.g. `1d`).
    pub window: String,

    /// Explicit destination, overriding the computed per-group path.
    pub output_file: Option<PathBuf>,

    /// Prometheus base URL.
    pub prometheus_url: String,

    /// Template file rendered with the recommendations.
    pub template: PathBuf,

    /// Print rendered output instead of writing files.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(config::DEFAULT_CONFIG_FILE),
            namespace: None,
            window: query::DEFAULT_WINDOW.to_string(),
            output_file: None,
            prometheus_url: prometheus::DEFAULT_PROMETHEUS_URL.to_string(),
            template: PathBuf::from(render::DEFAULT_TEMPLATE_FILE),
            dry_run: false,
        }
    }
}

/// Run the pipeline for one group or for every group in the config.
pub async fn run(opts: &RunOptions) -> Result<()> {
    let config = config::load_config(&opts.config_path)?;
    let client = PrometheusClient::new(&opts.prometheus_url)?;

    let groups: Vec<String> = match &opts.namespace {
        Some(namespace) => vec![namespace.clone()],
        None => config.group_names().map(str::to_string).collect(),
    };

    if groups.is_empty() {
        log::warn!(
            "no groups found in {}, nothing to do",
            opts.config_path.display()
        );
        return Ok(());
    }

    if opts.output_file.is_some() && groups.len() > 1 {
        log::warn!(
            "--output-file set while processing {} groups: every group writes the same path",
            groups.len()
        );
    }

    let mut failed = 0;
    for group in &groups {
        if let Err(e) = run_group(&client, &config, group, opts).await {
            log::error!("group {group} failed: {e}");
            eprintln!("❌ {group}: {e}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(RightsizerError::GroupsFailed(failed));
    }
    Ok(())
}

async fn run_group(
    client: &PrometheusClient,
    config: &CalcConfig,
    group: &str,
    opts: &RunOptions,
) -> Result<()> {
    println!("🔍 Sizing group: {group}");

    let group_config = config.group(group);
    let queries = query::build_queries(group, group_config.label_args.as_deref(), &opts.window)?;
    log::info!("cpu query: {}", queries.cpu);
    log::info!("memory query: {}", queries.memory);

    let cpu = client.query(&queries.cpu).await?;
    let memory = client.query(&queries.memory).await?;

    let mut resources = aggregate::extract_resources(&cpu, &memory);
    for pod in &group_config.remove_pods {
        if resources.remove(pod).is_some() {
            log::info!("dropped excluded pod key {pod}");
        }
    }

    let recommendations = percentile::calculate(&resources);
    let rendered = render::render_resources(&opts.template, &recommendations)?;

    if opts.dry_run {
        println!("--- {group} (dry run) ---");
        println!("{rendered}");
        return Ok(());
    }

    let path = opts
        .output_file
        .clone()
        .unwrap_or_else(|| output::default_output_path(group));
    output::write_rendered(&rendered, &path)?;

    println!(
        "✅ {group}: {} workload(s) written to {}",
        recommendations.len(),
        path.display()
    );
    Ok(())
}
