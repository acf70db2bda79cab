//! Percentile extraction for Monte Carlo aggregation

/// Standard percentiles reported by the ensemble.
pub mod standard {
    pub const P10: f64 = 0.10;
    pub const P50: f64 = 0.50;
    pub const P90: f64 = 0.90;
}

/// Linear-interpolation percentile of an ascending-sorted slice.
///
/// `p` is a fraction in `[0, 1]`; out-of-range values clamp to the ends.
/// Empty input returns 0.0 (the aggregation never passes one, but the
/// helper must not panic).
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
            let low = rank.floor() as usize;
            let high = rank.ceil() as usize;
            let fraction = rank - low as f64;
            sorted[low] + (sorted[high] - sorted[low]) * fraction
        }
    }
}
