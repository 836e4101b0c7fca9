use nalgebra::DVector;
use rand::Rng;
use tracing::{debug, info};

use super::correlation::{correlation_function, correlation_length_from_profile};
use super::lattice::Lattice;
use crate::config::SweepConfig;
use crate::error::Result;

/// Output of a probability sweep, aligned index by index with `probabilities`
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub probabilities: Vec<f64>,
    /// Correlation length xi(p)
    pub correlation_lengths: Vec<f64>,
    /// Sample-averaged correlation function g(r) for each probability
    pub profiles: Vec<DVector<f64>>,
    /// Fraction of samples containing a spanning cluster
    pub percolation_probabilities: Vec<f64>,
}

/// Averages over the samples drawn at one probability
#[derive(Debug, Clone)]
pub struct SampleAverage {
    pub profile: DVector<f64>,
    pub percolation_probability: f64,
}

/// Draw `samples` lattices at `probability` and average their correlation functions
pub fn sample_probability<R: Rng + ?Sized>(
    length: usize,
    probability: f64,
    samples: usize,
    rng: &mut R,
) -> SampleAverage {
    let mut total = DVector::zeros(2 * length);
    let mut percolating = 0usize;

    for sample in 0..samples {
        let mut lattice = Lattice::new(length, probability, rng);
        lattice.find_clusters();
        debug!(
            "  sample {}: {} occupied sites, {} clusters",
            sample,
            lattice.occupied_count(),
            lattice.clusters().len()
        );

        if lattice.percolates() {
            percolating += 1;
        }
        total += correlation_function(&lattice);
    }

    let n = samples.max(1) as f64;
    SampleAverage {
        profile: total / n,
        percolation_probability: percolating as f64 / n,
    }
}

/// Sweep the occupation probability over i / steps and estimate xi(p) at each point
pub fn correlation_length<R: Rng + ?Sized>(
    config: &SweepConfig,
    rng: &mut R,
) -> Result<SweepResult> {
    config.validate()?;

    let probabilities = config.probabilities();
    let mut correlation_lengths = Vec::with_capacity(probabilities.len());
    let mut profiles = Vec::with_capacity(probabilities.len());
    let mut percolation_probabilities = Vec::with_capacity(probabilities.len());

    for &p in &probabilities {
        info!("Probability: {:.4}", p);
        let average = sample_probability(config.length, p, config.samples, rng);
        let xi = correlation_length_from_profile(&average.profile);
        info!(
            "  xi = {:.6}, P(percolation) = {:.4}",
            xi, average.percolation_probability
        );

        correlation_lengths.push(xi);
        profiles.push(average.profile);
        percolation_probabilities.push(average.percolation_probability);
    }

    Ok(SweepResult {
        probabilities,
        correlation_lengths,
        profiles,
        percolation_probabilities,
    })
}
