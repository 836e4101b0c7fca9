use percolation::percolation::correlation_function;
use percolation::Lattice;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Show cluster labels for a few small lattices below, near and above p_c
fn main() {
    println!("🗺️  Cluster Maps");
    println!("===============");

    let mut rng = StdRng::seed_from_u64(7);
    let probabilities = [0.4, 0.59, 0.75];
    let names = ["Below threshold", "Near threshold", "Above threshold"];

    for (name, &p) in names.iter().zip(&probabilities) {
        let mut lattice = Lattice::new(12, p, &mut rng);
        lattice.find_clusters();

        println!("\n{} (p = {:.2}):", name, p);
        lattice.print_configuration();
        println!(
            "occupied: {}, clusters: {}, largest: {}, percolates: {}",
            lattice.occupied_count(),
            lattice.clusters().len(),
            lattice.largest_cluster_size(),
            lattice.percolates()
        );

        if let Some(largest) = lattice.clusters().iter().max_by_key(|c| c.size()) {
            let root = largest.root();
            println!(
                "largest cluster rooted at row {}, column {}",
                root / lattice.length,
                root % lattice.length
            );
        }

        let cf = correlation_function(&lattice);
        let reached = cf.iter().take_while(|&&g| g > 0.0).count();
        println!("g(r) reaches r = {}", reached);
    }
}
