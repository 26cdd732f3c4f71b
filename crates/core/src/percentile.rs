//! Percentile math over sorted samples and closed-form approximations.
//!
//! All routines are total: empty inputs and degenerate spreads return
//! neutral defaults instead of failing or producing NaN.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rank reported when there is nothing to compare against.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Percentile points per standard score in the linear z-score mapping.
const PERCENTILE_PER_Z: f64 = 20.0;

// ---------------------------------------------------------------------------
// Quartiles
// ---------------------------------------------------------------------------

/// The 25th, 50th and 75th percentile of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl Quartiles {
    /// Interpolated quartiles of an ascending sample, rounded to integers.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            p25: percentile_value(sorted, 0.25).round(),
            p50: percentile_value(sorted, 0.50).round(),
            p75: percentile_value(sorted, 0.75).round(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sample-based routines
// ---------------------------------------------------------------------------

/// Value at quantile `p` (`0.0..=1.0`) of an ascending slice.
///
/// Linearly interpolates between the two order statistics bracketing
/// `p * (n - 1)`. Returns `0.0` for an empty slice.
pub fn percentile_value(sorted: &[f64], p: f64) -> f64 {
    let Some(&last) = sorted.last() else {
        return 0.0;
    };

    let index = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if upper >= sorted.len() {
        return last;
    }
    if lower == upper {
        return sorted[lower];
    }

    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Share of an ascending slice strictly below `value`, as a rounded
/// integer percentage.
///
/// Returns [`NEUTRAL_PERCENTILE`] for an empty slice.
pub fn percentile_of_value(value: f64, sorted: &[f64]) -> u8 {
    if sorted.is_empty() {
        return NEUTRAL_PERCENTILE;
    }
    let below = sorted.partition_point(|&x| x < value);
    (below as f64 / sorted.len() as f64 * 100.0).round() as u8
}

// ---------------------------------------------------------------------------
// Parametric approximations
// ---------------------------------------------------------------------------

/// Approximate rank of `value` under a normal distribution.
///
/// Maps the z-score linearly (`50 + 20z`) and clamps to `0..=100`. This is a
/// display heuristic, not the normal CDF.
pub fn normal_percentile(value: f64, mean: f64, std: f64) -> u8 {
    if std.is_nan() || std <= 0.0 {
        return step_percentile(value, mean);
    }
    z_to_percentile((value - mean) / std)
}

/// Approximate rank of a duration under a log-normal model centred on
/// `median`, with log-spread `ln(1 + std / median)`.
///
/// Non-positive durations rank at 0; a non-positive median gives the
/// neutral rank.
pub fn log_normal_percentile(value: f64, median: f64, std: f64) -> u8 {
    if median.is_nan() || median <= 0.0 {
        return NEUTRAL_PERCENTILE;
    }
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let log_std = (1.0 + std / median).ln();
    if log_std.is_nan() || log_std <= 0.0 {
        return step_percentile(value, median);
    }
    z_to_percentile((value.ln() - median.ln()) / log_std)
}

/// Rank of `value` estimated from three quartile points only.
///
/// Piecewise linear through `(p25, 25)`, `(p50, 50)` and `(p75, 75)`,
/// extrapolated with the nearest segment and clamped. Lossy; use only when
/// the underlying sample is unavailable.
pub fn percentile_from_quartiles(value: f64, q: &Quartiles) -> u8 {
    let lower = ((q.p25, 25.0), (q.p50, 50.0));
    let upper = ((q.p50, 50.0), (q.p75, 75.0));
    let (first, second) = if value <= q.p50 {
        (lower, upper)
    } else {
        (upper, lower)
    };

    match interpolate(value, first).or_else(|| interpolate(value, second)) {
        Some(p) => clamp_round(p),
        None => step_percentile(value, q.p50),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn z_to_percentile(z: f64) -> u8 {
    if z.is_nan() {
        return NEUTRAL_PERCENTILE;
    }
    clamp_round(50.0 + z * PERCENTILE_PER_Z)
}

fn clamp_round(p: f64) -> u8 {
    p.clamp(0.0, 100.0).round() as u8
}

/// Zero-spread distribution: everything sits at `centre`.
fn step_percentile(value: f64, centre: f64) -> u8 {
    if value < centre {
        0
    } else if value > centre {
        100
    } else {
        NEUTRAL_PERCENTILE
    }
}

fn interpolate(value: f64, ((x0, y0), (x1, y1)): ((f64, f64), (f64, f64))) -> Option<f64> {
    let dx = x1 - x0;
    if dx.is_nan() || dx <= 0.0 {
        return None;
    }
    Some(y0 + (value - x0) * (y1 - y0) / dx)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- percentile_value --

    #[test]
    fn value_empty_slice_is_zero() {
        assert_eq!(percentile_value(&[], 0.5), 0.0);
    }

    #[test]
    fn value_endpoints_are_min_and_max() {
        let sorted = [3.0, 7.0, 8.0, 15.0, 21.0];
        assert_eq!(percentile_value(&sorted, 0.0), 3.0);
        assert_eq!(percentile_value(&sorted, 1.0), 21.0);
    }

    #[test]
    fn value_interpolates_midpoint() {
        assert_eq!(percentile_value(&[10.0, 20.0, 30.0, 40.0], 0.5), 25.0);
    }

    #[test]
    fn value_exact_index_returns_element() {
        // index = 0.25 * 4 = 1.0
        assert_eq!(percentile_value(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.25), 2.0);
    }

    #[test]
    fn value_single_element() {
        assert_eq!(percentile_value(&[42.0], 0.75), 42.0);
    }

    #[test]
    fn value_out_of_range_quantile_is_clamped() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile_value(&sorted, 1.5), 3.0);
        assert_eq!(percentile_value(&sorted, -0.5), 1.0);
    }

    #[test]
    fn quartiles_are_rounded() {
        // p25 index 0.75 -> 10*0.25 + 11*0.75 = 10.75
        let q = Quartiles::from_sorted(&[10.0, 11.0, 20.0, 31.0]);
        assert_eq!(q.p25, 11.0);
        assert_eq!(q.p50, 16.0); // 15.5 rounds up
        assert_eq!(q.p75, 23.0); // 22.75
    }

    // -- percentile_of_value --

    #[test]
    fn of_value_empty_is_neutral() {
        assert_eq!(percentile_of_value(10.0, &[]), 50);
    }

    #[test]
    fn of_value_counts_strictly_less() {
        let sorted = [50.0, 60.0, 70.0, 80.0, 90.0];
        assert_eq!(percentile_of_value(60.0, &sorted), 20);
    }

    #[test]
    fn of_value_extremes() {
        let sorted = [50.0, 60.0, 70.0, 80.0, 90.0];
        assert_eq!(percentile_of_value(50.0, &sorted), 0);
        assert_eq!(percentile_of_value(10.0, &sorted), 0);
        assert_eq!(percentile_of_value(91.0, &sorted), 100);
    }

    #[test]
    fn of_value_handles_ties() {
        let sorted = [10.0, 20.0, 20.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile_of_value(20.0, &sorted), 17); // 1/6
        assert_eq!(percentile_of_value(21.0, &sorted), 67); // 4/6
    }

    #[test]
    fn of_value_is_monotonic() {
        let sorted = [12.0, 15.0, 15.0, 40.0, 41.0, 77.0, 90.0];
        let mut previous = 0;
        for step in 0..=200 {
            let p = percentile_of_value(step as f64 * 0.5, &sorted);
            assert!(p >= previous, "rank dropped at value {}", step as f64 * 0.5);
            previous = p;
        }
    }

    // -- normal_percentile --

    #[test]
    fn normal_at_mean_is_fifty() {
        assert_eq!(normal_percentile(72.0, 72.0, 12.0), 50);
    }

    #[test]
    fn normal_one_std_above() {
        assert_eq!(normal_percentile(84.0, 72.0, 12.0), 70);
    }

    #[test]
    fn normal_clamps() {
        assert_eq!(normal_percentile(100.0, 50.0, 5.0), 100);
        assert_eq!(normal_percentile(0.0, 50.0, 5.0), 0);
    }

    #[test]
    fn normal_zero_std_is_step() {
        assert_eq!(normal_percentile(71.0, 72.0, 0.0), 0);
        assert_eq!(normal_percentile(72.0, 72.0, 0.0), 50);
        assert_eq!(normal_percentile(73.0, 72.0, 0.0), 100);
    }

    // -- log_normal_percentile --

    #[test]
    fn log_normal_at_median_is_fifty() {
        assert_eq!(log_normal_percentile(15.0, 15.0, 3.75), 50);
    }

    #[test]
    fn log_normal_faster_than_median_ranks_lower() {
        // ln(12/15) / ln(1.25) = -1.0 -> 30
        assert_eq!(log_normal_percentile(12.0, 15.0, 3.75), 30);
    }

    #[test]
    fn log_normal_degenerate_inputs() {
        assert_eq!(log_normal_percentile(0.0, 15.0, 3.75), 0);
        assert_eq!(log_normal_percentile(-3.0, 15.0, 3.75), 0);
        assert_eq!(log_normal_percentile(10.0, 0.0, 3.75), 50);
        assert_eq!(log_normal_percentile(16.0, 15.0, 0.0), 100);
    }

    // -- percentile_from_quartiles --

    #[test]
    fn quartile_inversion_hits_anchor_points() {
        let q = Quartiles {
            p25: 60.0,
            p50: 70.0,
            p75: 85.0,
        };
        assert_eq!(percentile_from_quartiles(60.0, &q), 25);
        assert_eq!(percentile_from_quartiles(70.0, &q), 50);
        assert_eq!(percentile_from_quartiles(85.0, &q), 75);
        assert_eq!(percentile_from_quartiles(65.0, &q), 38); // 37.5
    }

    #[test]
    fn quartile_inversion_extrapolates_and_clamps() {
        let q = Quartiles {
            p25: 60.0,
            p50: 70.0,
            p75: 80.0,
        };
        assert_eq!(percentile_from_quartiles(90.0, &q), 100);
        assert_eq!(percentile_from_quartiles(20.0, &q), 0);
        assert_eq!(percentile_from_quartiles(55.0, &q), 13); // 12.5
    }

    #[test]
    fn quartile_inversion_collapsed_quartiles() {
        let q = Quartiles {
            p25: 70.0,
            p50: 70.0,
            p75: 70.0,
        };
        assert_eq!(percentile_from_quartiles(69.0, &q), 0);
        assert_eq!(percentile_from_quartiles(70.0, &q), 50);
        assert_eq!(percentile_from_quartiles(71.0, &q), 100);
    }

    #[test]
    fn quartile_inversion_uses_other_segment_when_one_is_flat() {
        let q = Quartiles {
            p25: 70.0,
            p50: 70.0,
            p75: 80.0,
        };
        // Lower segment is flat; extrapolate from the upper one.
        assert_eq!(percentile_from_quartiles(66.0, &q), 40);
    }
}
