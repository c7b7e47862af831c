//! Row-wise reducers that combine per-target desirability values into one
//! scalar.
//!
//! Both take one row of transformed target values and a matching weight
//! slice. Weight magnitudes do not matter — only ratios do — since both
//! reducers divide by the weight sum. [`Objective`](crate::Objective)
//! normalizes stored weights to sum to 100 anyway.

/// Weighted arithmetic mean of one row: `Σ wᵢ·xᵢ / Σ wᵢ`.
#[must_use]
pub fn weighted_mean(row: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(row.len(), weights.len());
    let total: f64 = weights.iter().sum();
    row.iter()
        .zip(weights)
        .map(|(x, w)| w * x)
        .sum::<f64>()
        / total
}

/// Weighted geometric mean of one row: `exp(Σ wᵢ·ln(xᵢ) / Σ wᵢ)`.
///
/// A zero anywhere in the row yields `0.0` (the log-space sum diverges to
/// negative infinity), which is the desired behavior for desirability
/// scoring: one completely failed target zeroes the aggregate.
#[must_use]
pub fn weighted_geom_mean(row: &[f64], weights: &[f64]) -> f64 {
    debug_assert_eq!(row.len(), weights.len());
    let total: f64 = weights.iter().sum();
    let log_sum: f64 = row.iter().zip(weights).map(|(x, w)| w * x.ln()).sum();
    (log_sum / total).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn mean_weighs_values() {
        assert_eq!(weighted_mean(&[1.0, 0.0], &[40.0, 60.0]), 0.4);
        assert_eq!(weighted_mean(&[2.0, 2.0], &[1.0, 3.0]), 2.0);
    }

    #[test]
    fn mean_scale_invariant_in_weights() {
        let a = weighted_mean(&[0.3, 0.9], &[1.0, 2.0]);
        let b = weighted_mean(&[0.3, 0.9], &[100.0, 200.0]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn geom_mean_equal_weights() {
        let got = weighted_geom_mean(&[4.0, 9.0], &[50.0, 50.0]);
        assert!((got - 6.0).abs() < 1e-12);
    }

    #[test]
    fn geom_mean_skewed_weights() {
        // exp((3·ln 8 + 1·ln 2) / 4) = (8^3 · 2)^(1/4) = 1024^(1/4)
        let got = weighted_geom_mean(&[8.0, 2.0], &[3.0, 1.0]);
        assert!((got - 1024.0_f64.powf(0.25)).abs() < 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn geom_mean_zero_collapses_to_zero() {
        assert_eq!(weighted_geom_mean(&[0.0, 1.0], &[50.0, 50.0]), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn geom_mean_of_ones_is_one() {
        assert_eq!(weighted_geom_mean(&[1.0, 1.0, 1.0], &[20.0, 30.0, 50.0]), 1.0);
    }
}
