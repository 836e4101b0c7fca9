//! Output formatting and logging utilities

use itertools::Itertools;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::sync::Mutex;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, fmt::format::Writer, fmt::layer, fmt::time::FormatTime,
    layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::error::Result;
use crate::percolation::SweepResult;

pub const PLOT_TITLE: &str = "Correlation Length vs Occupation Probability";
pub const PLOT_X_LABEL: &str = "p";
pub const PLOT_Y_LABEL: &str = "ξ(p)";

/// Wall-clock HH:MM:SS stamp for log lines
struct ClockTimer;

impl FormatTime for ClockTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let secs = StdSystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        write!(
            w,
            "{:02}:{:02}:{:02}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60
        )
    }
}

/// Level for the sweep log: per-sample detail only when `verbose` is set
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Setup logging to a file, or to stderr so stdout stays free for the results table
pub fn setup_output(log_path: Option<&String>, verbose: bool) {
    let level = log_level(verbose);
    match log_path.map(|path| (path, File::create(path))) {
        Some((path, Ok(log))) => {
            let file_layer = layer()
                .with_writer(Mutex::new(log))
                .with_timer(ClockTimer)
                .with_ansi(false)
                .with_filter(level);
            Registry::default().with(file_layer).init();
            info!("Sweep log written to: {}", path);
        }
        Some((path, Err(err))) => {
            eprintln!("Could not create log file {}: {}", path, err);
            init_stderr(level);
        }
        None => init_stderr(level),
    }
}

fn init_stderr(level: LevelFilter) {
    let stderr_layer = layer()
        .with_writer(std::io::stderr)
        .with_timer(ClockTimer)
        .with_ansi(true)
        .with_filter(level);
    Registry::default().with(stderr_layer).init();
}

/// Write the (p, xi) table consumed by the plotting step.
///
/// Header lines start with `#` and carry the plot title and axis labels.
pub fn write_results<W: Write>(writer: &mut W, result: &SweepResult) -> Result<()> {
    writeln!(writer, "# title: {}", PLOT_TITLE)?;
    writeln!(writer, "# x: {}", PLOT_X_LABEL)?;
    writeln!(writer, "# y: {}", PLOT_Y_LABEL)?;
    writeln!(writer, "p,xi,percolation_probability")?;

    for ((p, xi), pp) in result
        .probabilities
        .iter()
        .zip(&result.correlation_lengths)
        .zip(&result.percolation_probabilities)
    {
        writeln!(writer, "{:.4},{:.8},{:.4}", p, xi, pp)?;
    }
    Ok(())
}

/// Render one averaged correlation profile as a comma-separated row,
/// trailing zeros dropped
pub fn format_profile(profile: &[f64]) -> String {
    let reached = profile
        .iter()
        .rposition(|&g| g != 0.0)
        .map_or(0, |last| last + 1);
    profile[..reached]
        .iter()
        .map(|g| format!("{:.6}", g))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    fn small_result() -> SweepResult {
        SweepResult {
            probabilities: vec![0.0, 0.5, 1.0],
            correlation_lengths: vec![0.0, 1.5, 0.0],
            profiles: vec![DVector::zeros(4); 3],
            percolation_probabilities: vec![0.0, 0.25, 1.0],
        }
    }

    #[test]
    fn test_write_results() {
        let mut buffer = Vec::new();
        write_results(&mut buffer, &small_result()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# title: Correlation Length vs Occupation Probability");
        assert_eq!(lines[2], "# y: ξ(p)");
        assert_eq!(lines[3], "p,xi,percolation_probability");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "0.5000,1.50000000,0.2500");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false), LevelFilter::INFO);
        assert_eq!(log_level(true), LevelFilter::DEBUG);
    }

    #[test]
    fn test_format_profile_drops_trailing_zeros() {
        assert_eq!(format_profile(&[1.0, 0.5, 0.0, 0.0]), "1.000000,0.500000");
        assert_eq!(format_profile(&[0.0, 0.0]), "");
    }
}
