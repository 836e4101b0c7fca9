pub mod analysis;
pub mod cluster;
pub mod correlation;
pub mod estimator;
pub mod lattice;

pub use cluster::{Cluster, ClusterId};
pub use correlation::{correlation_function, correlation_length_from_profile};
pub use estimator::{correlation_length, sample_probability, SampleAverage, SweepResult};
pub use lattice::{Direction, Lattice, Site};
