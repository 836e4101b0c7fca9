pub mod config;
pub mod error;
pub mod io;
pub mod percolation;

pub use config::SweepConfig;
pub use error::PercolationError;
pub use percolation::{correlation_length, Lattice, SweepResult};
