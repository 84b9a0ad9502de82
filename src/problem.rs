//! Problem definition for the capacitated vehicle routing problem with time windows.

use crate::error::ProblemError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Index of the depot. Every route starts here.
pub const DEPOT: usize = 0;

/// Delivery time window of a location, in seconds from the start of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start_seconds: u64,
    finish_seconds: u64,
}

impl TimeWindow {
    /// Create a new time window.
    pub fn new(start_seconds: u64, finish_seconds: u64) -> Self {
        TimeWindow {
            start_seconds,
            finish_seconds,
        }
    }

    pub fn start_seconds(&self) -> u64 {
        self.start_seconds
    }

    pub fn finish_seconds(&self) -> u64 {
        self.finish_seconds
    }
}

/// Serialized form of a problem instance.
#[derive(Debug, Clone, Deserialize)]
struct ProblemFile {
    time_windows: Vec<TimeWindow>,
    duration_matrix: Vec<Vec<u64>>,
    #[serde(default)]
    pickup_weights_kg: Option<Vec<u64>>,
    max_executors: usize,
    #[serde(default)]
    max_executor_weight_kg: Option<u64>,
}

/// A routing problem instance. Immutable for the lifetime of a search.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    time_windows: Vec<TimeWindow>,
    duration_matrix: Vec<Vec<u64>>,
    pickup_weights_kg: Vec<u64>,
    max_executors: usize,
    max_executor_weight_kg: Option<u64>,
}

impl Problem {
    /// Create a new problem, validating that every input is index-aligned.
    ///
    /// Locations without a pickup weight weigh nothing. A capacity of `None`
    /// leaves executors unconstrained.
    pub fn new(
        time_windows: Vec<TimeWindow>,
        duration_matrix: Vec<Vec<u64>>,
        pickup_weights_kg: Option<Vec<u64>>,
        max_executors: usize,
        max_executor_weight_kg: Option<u64>,
    ) -> Result<Self, ProblemError> {
        if max_executors == 0 {
            return Err(ProblemError::EmptyFleet);
        }

        let n = duration_matrix.len();
        if time_windows.len() != n {
            return Err(ProblemError::TimeWindowCount {
                expected: n,
                found: time_windows.len(),
            });
        }

        for (row, durations) in duration_matrix.iter().enumerate() {
            if durations.len() != n {
                return Err(ProblemError::MatrixShape {
                    row,
                    expected: n,
                    found: durations.len(),
                });
            }
        }

        let mut weights = pickup_weights_kg.unwrap_or_default();
        if weights.len() > n {
            return Err(ProblemError::PickupWeightCount {
                expected: n,
                found: weights.len(),
            });
        }
        weights.resize(n, 0);

        Ok(Problem {
            time_windows,
            duration_matrix,
            pickup_weights_kg: weights,
            max_executors,
            max_executor_weight_kg,
        })
    }

    /// Parse a problem from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ProblemError> {
        let file: ProblemFile = serde_json::from_str(json)?;
        Problem::new(
            file.time_windows,
            file.duration_matrix,
            file.pickup_weights_kg,
            file.max_executors,
            file.max_executor_weight_kg,
        )
    }

    /// Load a problem from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProblemError> {
        let json = fs::read_to_string(path)?;
        Problem::from_json(&json)
    }

    /// Number of locations, depot included.
    pub fn location_count(&self) -> usize {
        self.time_windows.len()
    }

    pub fn time_window(&self, location: usize) -> &TimeWindow {
        &self.time_windows[location]
    }

    /// Travel time in seconds from one location to another.
    pub fn duration(&self, from: usize, to: usize) -> u64 {
        self.duration_matrix[from][to]
    }

    pub fn pickup_weight(&self, location: usize) -> u64 {
        self.pickup_weights_kg[location]
    }

    pub fn max_executors(&self) -> usize {
        self.max_executors
    }

    pub fn max_executor_weight(&self) -> Option<u64> {
        self.max_executor_weight_kg
    }
}
