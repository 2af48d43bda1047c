use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Collect all valid measurements from a depth map.
///
/// Validity is defined solely by `value > 0`; the container has no
/// separate mask channel.
pub fn valid_depths(depth: &Array2<f64>) -> Vec<f64> {
    depth.iter().copied().filter(|&v| v > 0.0).collect()
}

/// Linear-interpolation percentile over an ascending-sorted slice,
/// matching the numpy default rule: rank = q/100 * (n-1).
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Summary statistics over the valid subset of a depth map, in meters.
/// Computed once; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthStats {
    pub valid_count: usize,
    pub min_m: f64,
    pub max_m: f64,
    pub median_m: f64,
    pub p99_m: f64,
}

impl DepthStats {
    /// Compute from the valid (strictly positive) measurements.
    /// Returns `None` when the subset is empty, leaving the caller to
    /// decide how loudly to fail.
    pub fn from_valid(valid: &[f64]) -> Option<DepthStats> {
        if valid.is_empty() {
            return None;
        }
        let mut sorted = valid.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(DepthStats {
            valid_count: sorted.len(),
            min_m: sorted[0],
            max_m: sorted[sorted.len() - 1],
            median_m: percentile(&sorted, 50.0),
            p99_m: percentile(&sorted, 99.0),
        })
    }

    /// The display clipping bound shared by the histogram domain and the
    /// heatmap color domain.
    pub fn clip_bound(&self) -> f64 {
        self.p99_m
    }
}
