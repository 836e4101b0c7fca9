use nalgebra::DVector;

use super::lattice::Lattice;

/// Correlation function g(r) of the center site for one sample lattice.
///
/// Entry `r - 1` holds the fraction of sites at distance `r` from the center
/// that belong to the center's cluster. The vector has length `2 * L` and is
/// all zero when the center is empty or its cluster percolates. The scan stops
/// at the first radius with no overlap, leaving the remaining entries at zero.
///
/// `find_clusters` must have been called on the lattice.
pub fn correlation_function(lattice: &Lattice) -> DVector<f64> {
    let mut cf = DVector::zeros(2 * lattice.length);

    let Some(center) = lattice.center() else {
        return cf;
    };
    let center_site = lattice.site(center);
    let Some(center_cluster) = center_site.cluster else {
        return cf;
    };
    if !center_site.occupied || lattice.is_percolating(center_cluster) {
        return cf;
    }

    let max_distance = 2 * lattice.length;
    let mut distance = 1;
    let mut neighbors = lattice.neighbors_at_radius(center, distance);

    while distance < max_distance && !neighbors.is_empty() {
        if distance == 1 {
            cf[0] = 1.0;
        } else {
            let numerator = neighbors
                .iter()
                .map(|&i| lattice.site(i))
                .filter(|s| s.occupied && s.cluster == Some(center_cluster))
                .count();
            if numerator == 0 {
                break;
            }
            cf[distance - 1] = numerator as f64 / neighbors.len() as f64;
        }
        distance += 1;
        neighbors = lattice.neighbors_at_radius(center, distance);
    }

    cf
}

/// Correlation length from an (averaged) correlation profile.
///
/// xi^2 = sum (j+1)^2 g[j] / sum g[j], with xi = 0 for an all-zero profile.
pub fn correlation_length_from_profile(profile: &DVector<f64>) -> f64 {
    let sum_cf = profile.sum();
    if sum_cf == 0.0 {
        return 0.0;
    }

    let weighted: f64 = profile
        .iter()
        .enumerate()
        .map(|(j, g)| ((j + 1) * (j + 1)) as f64 * g)
        .sum();

    (weighted / sum_cf).sqrt()
}
