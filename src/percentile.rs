//! Percentile-based recommendation per pod key.
//!
//! Nearest-rank selection at the 90th percentile: sort ascending, pick
//! `round(0.9 * n) - 1` with the index clamped to `[0, n-1]`. A metric
//! with no samples counts as a single zero sample. Every recommendation
//! is floored at 10 to avoid near-zero requests.

use crate::aggregate::PodSamples;
use serde::Serialize;
use std::collections::BTreeMap;

/// Percentile used for nearest-rank selection.
pub const PERCENTILE: u8 = 90;

/// Minimum recommended value, in the metric's own unit (m / Mi).
pub const RESOURCE_FLOOR: i64 = 10;

/// Rendered recommendation for one pod key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub cpu: String,
    pub memory: String,
}

/// Reduce every pod key's sample lists to formatted recommendations.
pub fn calculate(samples: &BTreeMap<String, PodSamples>) -> BTreeMap<String, Recommendation> {
    samples
        .iter()
        .map(|(pod, s)| {
            let cpu = recommend(pod, "cpu", &s.cpu);
            let memory = recommend(pod, "memory", &s.memory);
            (
                pod.clone(),
                Recommendation {
                    cpu: format!("{cpu}m"),
                    memory: format!("{memory}Mi"),
                },
            )
        })
        .collect()
}

fn recommend(pod: &str, metric: &str, samples: &[i64]) -> i64 {
    let zero = [0];
    let samples = if samples.is_empty() {
        log::warn!("{pod} has no {metric} samples, adding null value");
        &zero[..]
    } else {
        samples
    };

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let index = nearest_rank_index(PERCENTILE, sorted.len());
    apply_floor(sorted[index])
}

/// `round(p/100 * n) - 1`, ties to even, clamped into `[0, n-1]`.
fn nearest_rank_index(percentile: u8, count: usize) -> usize {
    let raw = ((f64::from(percentile) / 100.0) * count as f64).round_ties_even() as i64 - 1;
    raw.clamp(0, count as i64 - 1) as usize
}

/// Raise any value below the floor to exactly the floor.
pub fn apply_floor(value: i64) -> i64 {
    if value < RESOURCE_FLOOR {
        RESOURCE_FLOOR
    } else {
        value
    }
}
