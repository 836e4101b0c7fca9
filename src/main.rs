//! Percolation Correlation-Length Command-Line Interface
//!
//! Runs a probability sweep and writes the (p, xi) table for plotting.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing::{debug, info};

use percolation::config::{Args, SweepConfig};
use percolation::io::{format_profile, setup_output, write_results};
use percolation::percolation::analysis;
use percolation::correlation_length;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.output.as_ref(), args.verbose);

    let config = match &args.config_file {
        Some(path) => {
            info!("Reading configuration from: {}", path);
            SweepConfig::from_file(path)
                .wrap_err_with(|| format!("Unable to load configuration file: {}", path))?
        }
        None => SweepConfig::default(),
    }
    .with_overrides(&args);
    config.validate().wrap_err("Invalid sweep configuration")?;

    info!("Configuration loaded:\n{:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Beginning run...");
    let start = Instant::now();
    let result = correlation_length(&config, &mut rng).wrap_err("Sweep failed")?;
    info!("Finished. Elapsed time: {:.3} s", start.elapsed().as_secs_f64());

    for (p, profile) in result.probabilities.iter().zip(&result.profiles) {
        debug!("g(r) at p = {:.4}: [{}]", p, format_profile(profile.as_slice()));
    }
    if let Some(p_peak) = analysis::peak_probability(&result) {
        info!(
            "Correlation length peaks at p = {:.4} (p_c = {:.6})",
            p_peak,
            analysis::critical_probability()
        );
    }

    match &args.results {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Unable to create results file: {}", path))?;
            let mut writer = BufWriter::new(file);
            write_results(&mut writer, &result)?;
            writer.flush()?;
            info!("Results written to: {}", path);
        }
        None => write_results(&mut io::stdout().lock(), &result)?,
    }

    Ok(())
}
