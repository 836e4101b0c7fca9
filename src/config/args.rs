//! Command-line argument parsing for correlation-length sweeps

use clap::Parser;

/// Estimate the percolation correlation length of a square lattice
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override lattice side length
    #[arg(long)]
    pub length: Option<usize>,

    /// Override number of probability steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Override number of samples per probability
    #[arg(long)]
    pub samples: Option<usize>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the log to this file (default stderr)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log every sample at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the results table to this file instead of stdout
    #[arg(short, long)]
    pub results: Option<String>,
}
