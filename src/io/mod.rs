//! Input/Output operations for percolation sweeps
//!
//! This module handles logging setup and the results table.

mod output;

pub use output::{
    format_profile, log_level, setup_output, write_results, PLOT_TITLE, PLOT_X_LABEL, PLOT_Y_LABEL,
};
