//! Configuration parameters for the probabilistic route builder.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration settings for the route search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wall-clock budget for a single search call
    pub time_limit: Duration,
    /// Recursion depth of the top-level search call
    pub search_depth: u32,
    /// Iterations per search level, multiplied by the number of locations
    pub iterations_per_location: usize,
    /// Loading time spent at the first stop of every route
    pub pickup_duration_seconds: u64,
    /// Weight applied to every second of late arrival
    pub lateness_penalty_factor: u64,
    /// Maximum number of attempts to find a distinct second cell during mutation
    pub max_mutation_attempts: usize,
    /// Seed for the search RNG. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: Duration::from_secs(5),
            search_depth: 2,
            iterations_per_location: 10,
            pickup_duration_seconds: 1800,
            lateness_penalty_factor: 100,
            max_mutation_attempts: 1000,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = duration;
        self
    }

    /// Set the time limit from fractional seconds.
    pub fn with_time_limit_secs(mut self, seconds: f64) -> Self {
        self.time_limit = Duration::from_secs_f64(seconds.max(0.0));
        self
    }

    /// Set the recursion depth of the search.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Set the number of iterations per location.
    pub fn with_iterations_per_location(mut self, iterations: usize) -> Self {
        self.iterations_per_location = iterations;
        self
    }

    /// Set the loading time at the first stop.
    pub fn with_pickup_duration_seconds(mut self, seconds: u64) -> Self {
        self.pickup_duration_seconds = seconds;
        self
    }

    /// Set the late arrival penalty factor.
    pub fn with_lateness_penalty_factor(mut self, factor: u64) -> Self {
        self.lateness_penalty_factor = factor;
        self
    }

    /// Set the mutation retry bound.
    pub fn with_max_mutation_attempts(mut self, attempts: usize) -> Self {
        self.max_mutation_attempts = attempts;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
