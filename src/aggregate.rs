//! Turns raw query results into per-workload sample lists.
//!
//! Pod names carry an instance-specific suffix (`-x2k9p`); stripping it
//! collapses every replica of a workload onto one pod key, so the samples
//! of all replicas land in the same list. Multiple series mapping to the
//! same key concatenate; the percentile is taken over the whole population.

use crate::prometheus::{QueryResponse, Series};
use std::collections::BTreeMap;

/// Sampled values for one pod key. CPU in millicores, memory in Mi.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodSamples {
    pub cpu: Vec<i64>,
    pub memory: Vec<i64>,
}

/// Collapse a raw pod name down to its owning workload's name.
///
/// Strips the 5-character instance suffix, then one trailing `-` left over
/// from the separator. Names of 5 characters or fewer have no suffix to
/// strip and are kept whole.
pub fn pod_key(pod: &str) -> String {
    let stem = pod
        .get(..pod.len().saturating_sub(5))
        .unwrap_or_default();
    if stem.is_empty() {
        return pod.to_string();
    }
    stem.strip_suffix('-').unwrap_or(stem).to_string()
}

/// Aggregate both query responses into per-pod-key sample lists.
pub fn extract_resources(
    cpu: &QueryResponse,
    memory: &QueryResponse,
) -> BTreeMap<String, PodSamples> {
    let mut resources: BTreeMap<String, PodSamples> = BTreeMap::new();

    for (key, value) in cpu.data.result.iter().filter_map(sample) {
        resources.entry(key).or_default().cpu.push(value);
    }
    for (key, value) in memory.data.result.iter().filter_map(sample) {
        resources.entry(key).or_default().memory.push(value);
    }

    resources
}

/// One (pod key, rounded value) pair from a series, or `None` if the
/// series has no pod label or no finite value.
fn sample(series: &Series) -> Option<(String, i64)> {
    let Some(pod) = series.metric.get("pod") else {
        log::debug!("skipping series without a pod label");
        return None;
    };
    let Some((_, raw)) = series.value.as_ref() else {
        log::debug!("skipping series for {pod} without a value");
        return None;
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some((pod_key(pod), v.round_ties_even() as i64)),
        _ => {
            log::debug!("skipping unparsable sample {raw:?} for {pod}");
            None
        }
    }
}
