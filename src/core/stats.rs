//! Small numeric utilities used by the correlation view.
//!
//! All functions are pure and allocation-free; undefined results (empty
//! input, zero variance) are reported as `None` instead of `NaN`.

use serde::{Deserialize, Serialize};

use crate::core::types::Valence;

/// Root-mean-square deviation between two valence series.
///
/// Only the overlapping prefix is compared: when one series is longer, its
/// tail is ignored. Returns `None` when the overlap is empty.
#[must_use]
pub fn rmsd<A: Valence, B: Valence>(series: &[A], reference: &[B]) -> Option<f64> {
    let len = series.len().min(reference.len());
    if len == 0 {
        return None;
    }
    let sum_sq: f64 = series
        .iter()
        .zip(reference)
        .map(|(a, b)| {
            let diff = a.valence() - b.valence();
            diff * diff
        })
        .sum();
    Some((sum_sq / len as f64).sqrt())
}

/// Squared deviation of every overlapping beat, in order.
#[must_use]
pub fn squared_deviations<A: Valence, B: Valence>(series: &[A], reference: &[B]) -> Vec<f64> {
    series
        .iter()
        .zip(reference)
        .map(|(a, b)| {
            let diff = a.valence() - b.valence();
            diff * diff
        })
        .collect()
}

/// Straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[must_use]
    pub fn predict(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares regression of `y` on `x` from aggregate sums.
///
/// Returns `None` for fewer than two samples or when every `x` is equal.
#[must_use]
pub fn linear_regression(samples: &[(f64, f64)]) -> Option<LinearFit> {
    if samples.len() < 2 {
        return None;
    }
    let n = samples.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for &(x, y) in samples {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some(LinearFit { slope, intercept })
}

/// Pearson product-moment correlation coefficient.
#[must_use]
pub fn pearson_correlation(samples: &[(f64, f64)]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let n = samples.len() as f64;
    let mean_x = samples.iter().map(|s| s.0).sum::<f64>() / n;
    let mean_y = samples.iter().map(|s| s.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(x, y) in samples {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some((cov / denominator).clamp(-1.0, 1.0))
}

/// Minimum and maximum of `values`, skipping non-finite entries.
#[must_use]
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::{extent, rmsd};

    #[test]
    fn rmsd_of_empty_overlap_is_undefined() {
        let empty: [f64; 0] = [];
        assert_eq!(rmsd(&empty, &[1.0, 2.0]), None);
    }

    #[test]
    fn extent_skips_non_finite() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(extent(std::iter::empty()), None);
    }
}
