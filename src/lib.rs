//! # Route Builder
//!
//! A probabilistic route builder for the capacitated vehicle routing problem
//! with time windows.
//!
//! Locations are assigned to executors and ordered within each route by a
//! time-budgeted, depth-limited recursive hill climb. Candidates are produced
//! by swapping two cells of the solution space and are accepted only on strict
//! improvement of the fined duration (travel and loading time plus lateness
//! and overweight penalties).

pub mod config;
pub mod error;
pub mod evaluator;
pub mod mutation;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::error::BuildError;
use crate::evaluator::Evaluator;
use crate::mutation::Mutator;
use crate::problem::Problem;
use crate::solution::{Route, SolutionSpace};
use crate::utils::{round_seconds, SearchStatistics};

use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The search orchestrator.
pub struct RouteBuilder {
    pub problem: Problem,
    pub config: Config,
    pub mutator: Mutator,
    pub build_duration: Duration,
    pub statistics: SearchStatistics,
    rng: ChaCha8Rng,
    start_time: Instant,
}

impl RouteBuilder {
    /// Create a new route builder for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        RouteBuilder {
            problem,
            mutator: Mutator::new(config.max_mutation_attempts),
            config,
            build_duration: Duration::from_secs(0),
            statistics: SearchStatistics::default(),
            rng,
            start_time: Instant::now(),
        }
    }

    /// Objective function bound to this builder's problem.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.problem, &self.config)
    }

    /// Wall-clock seconds spent in the last search, rounded to four decimals.
    pub fn build_duration_seconds(&self) -> f64 {
        round_seconds(self.build_duration)
    }

    /// Search for the best assignment of locations to executors.
    ///
    /// Returns `Ok(None)` when there is nothing to route (at most one
    /// location). Two locations produce a single route without searching.
    /// Otherwise the search starts from the identity tour on one executor and
    /// never returns anything worse than it.
    pub fn search_routes(&mut self) -> Result<Option<SolutionSpace>, BuildError> {
        self.start_time = Instant::now();
        self.statistics = SearchStatistics::default();

        let location_count = self.problem.location_count();
        info!(
            "Searching routes for {} locations, {} executors, time limit {:?}",
            location_count,
            self.problem.max_executors(),
            self.config.time_limit
        );

        if location_count <= 1 {
            info!("Nothing to route");
            self.build_duration = self.start_time.elapsed();
            return Ok(None);
        }

        let mut base_route = Route::new((0..location_count).collect());
        self.evaluator().evaluate(&mut base_route)?;

        if location_count == 2 {
            let space = SolutionSpace::new(vec![base_route], 1)?;
            self.finish(&space)?;
            return Ok(Some(space));
        }

        let baseline = SolutionSpace::new(vec![base_route], self.problem.max_executors())?;
        debug!(
            "Baseline fined duration: {}",
            baseline.fined_duration_seconds()?
        );

        let iterations_limit = location_count * self.config.iterations_per_location;
        let winner =
            self.recursive_search(baseline, iterations_limit, self.config.search_depth, None)?;

        self.finish(&winner)?;
        Ok(Some(winner))
    }

    /// One level of the hill climb.
    ///
    /// The row limit starts at the first executor and widens every
    /// `ceil(iterations_limit / max_executors)` iterations, so fewer executors
    /// are optimized first.
    fn recursive_search(
        &mut self,
        space: SolutionSpace,
        iterations_limit: usize,
        depth: u32,
        row_limit: Option<usize>,
    ) -> Result<SolutionSpace, BuildError> {
        if depth == 0 || self.is_time_exceeded() {
            return Ok(space);
        }

        let executors = self.problem.max_executors();
        let period = ((iterations_limit + executors - 1) / executors).max(1);

        let mut best = space;
        let mut row_limit = row_limit.unwrap_or(0);

        for i in 0..iterations_limit {
            if (i + 1) % period == 0 {
                let widened = (row_limit + 1).min(executors - 1);
                if widened != row_limit {
                    debug!("Depth {}: row limit widened to {}", depth, widened);
                }
                row_limit = widened;
                self.statistics.widest_row_limit = self.statistics.widest_row_limit.max(row_limit);
            }

            self.statistics.iterations += 1;

            match self.mutator.mutate(&best, row_limit, &mut self.rng) {
                Ok(mut candidate) => {
                    Evaluator::new(&self.problem, &self.config).evaluate_space(&mut candidate)?;
                    self.statistics.evaluations += 1;

                    if depth > 1 {
                        candidate = self.recursive_search(
                            candidate,
                            iterations_limit,
                            depth - 1,
                            Some(row_limit),
                        )?;
                    }

                    let candidate_fined = candidate.fined_duration_seconds()?;
                    if candidate_fined < best.fined_duration_seconds()? {
                        debug!(
                            "Depth {}, iteration {}: improved fined duration to {}",
                            depth, i, candidate_fined
                        );
                        self.statistics.improvements += 1;
                        best = candidate;
                    }
                }
                Err(err) => {
                    trace!("Depth {}, iteration {}: {}", depth, i, err);
                    self.statistics.skipped_mutations += 1;
                }
            }

            if self.is_time_exceeded() {
                return Ok(best);
            }
        }

        Ok(best)
    }

    fn is_time_exceeded(&self) -> bool {
        self.start_time.elapsed() >= self.config.time_limit
    }

    fn finish(&mut self, winner: &SolutionSpace) -> Result<(), BuildError> {
        self.build_duration = self.start_time.elapsed();

        self.statistics.runtime = self.build_duration;
        self.statistics.best_fined_duration_seconds = winner.fined_duration_seconds()?;
        self.statistics.best_duration_seconds = winner.duration_seconds()?;
        self.statistics.best_route_count = winner.route_count()?;

        if self.is_time_exceeded() {
            info!("Time limit of {:?} reached", self.config.time_limit);
        }
        info!(
            "Best fined duration {} over {} routes after {}s",
            self.statistics.best_fined_duration_seconds,
            self.statistics.best_route_count,
            self.build_duration_seconds()
        );

        Ok(())
    }
}
