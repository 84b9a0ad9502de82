//! Utility functions and structures for reporting search results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use itertools::Itertools;

use crate::error::SolutionError;
use crate::solution::SolutionSpace;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Seconds of a duration rounded to four decimal places.
pub fn round_seconds(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 10_000.0).round() / 10_000.0
}

/// Render the routes and totals of an evaluated solution space.
pub fn solution_report(space: &SolutionSpace) -> Result<String, SolutionError> {
    let mut report = String::new();

    for route in space.routes()? {
        let cost = route.cost()?;
        report.push_str(&format!(
            "[{}] total weight: {}, duration: {}, fined: {}\n",
            route.locations().iter().join(","),
            cost.total_weight_kg,
            cost.duration_seconds,
            cost.fined_duration_seconds
        ));
    }

    report.push_str(&format!(
        "fined duration: {} s\n",
        space.fined_duration_seconds()?
    ));
    report.push_str(&format!(
        "has fine: {}\n",
        if space.has_fine()? { "yes" } else { "no" }
    ));

    Ok(report)
}

/// Save a solution report to a file.
pub fn save_solution<P: AsRef<Path>>(
    space: &SolutionSpace,
    build_duration: Duration,
    path: P,
) -> io::Result<()> {
    let report =
        solution_report(space).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let mut file = File::create(path)?;
    write!(file, "{}", report)?;
    writeln!(file, "build time: {}s", round_seconds(build_duration))?;

    Ok(())
}

/// Statistics about a finished search.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    pub iterations: u64,
    pub evaluations: u64,
    pub improvements: u64,
    pub skipped_mutations: u64,
    pub widest_row_limit: usize,
    pub runtime: Duration,
    pub best_fined_duration_seconds: u64,
    pub best_duration_seconds: u64,
    pub best_route_count: usize,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Iterations: {}
- Evaluated Candidates: {}
- Improvements: {}
- Skipped Mutations: {}
- Widest Row Limit: {}
- Runtime: {}
- Best Fined Duration: {}
- Best Duration: {}
- Best Routes: {}",
            self.iterations,
            self.evaluations,
            self.improvements,
            self.skipped_mutations,
            self.widest_row_limit,
            format_duration(self.runtime),
            self.best_fined_duration_seconds,
            self.best_duration_seconds,
            self.best_route_count
        )
    }
}
