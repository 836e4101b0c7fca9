//! Utility functions for analyzing percolation sweep results

use super::estimator::SweepResult;

/// Site percolation threshold of the square lattice (numerical result)
/// p_c ≈ 0.592746
pub fn critical_probability() -> f64 {
    0.592746
}

/// Correlation length exponent in 2D (exact result)
/// xi ~ |p - p_c|^(-nu) with nu = 4/3
pub fn correlation_length_exponent() -> f64 {
    4.0 / 3.0
}

/// Probability at which the estimated correlation length peaks.
/// On a finite lattice this is a rough estimate of p_c.
pub fn peak_probability(result: &SweepResult) -> Option<f64> {
    result
        .probabilities
        .iter()
        .zip(&result.correlation_lengths)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(&p, _)| p)
}
