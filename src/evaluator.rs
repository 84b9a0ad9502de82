//! Objective function: duration and penalties of routes.

use crate::config::Config;
use crate::error::RouteError;
use crate::problem::Problem;
use crate::solution::{Route, RouteCost, SolutionSpace};

/// Scores routes against the shared problem inputs.
///
/// Walking a route, the clock starts at the window start of the first stop and
/// the loading time is added there. Every later stop adds its travel time.
/// Arriving early waits for the window to open; arriving late is fined
/// `lateness * lateness_penalty_factor`. While the picked-up weight exceeds the
/// capacity, every leg is fined `excess_weight * leg_duration`.
pub struct Evaluator<'a> {
    problem: &'a Problem,
    pickup_duration_seconds: u64,
    lateness_penalty_factor: u64,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator for the given problem and configuration.
    pub fn new(problem: &'a Problem, config: &Config) -> Self {
        Evaluator {
            problem,
            pickup_duration_seconds: config.pickup_duration_seconds,
            lateness_penalty_factor: config.lateness_penalty_factor,
        }
    }

    /// Compute the cost of visiting `locations` in order.
    ///
    /// # Panics
    ///
    /// Panics if a location is not an index of the problem. [`Evaluator::evaluate`]
    /// checks the indices first.
    pub fn cost_of(&self, locations: &[usize]) -> RouteCost {
        let problem = self.problem;
        let capacity = problem.max_executor_weight();

        let mut duration = 0;
        let mut fined_duration = 0;
        let mut weight = 0;
        let mut clock = 0;

        for (i, &location) in locations.iter().enumerate() {
            let window = problem.time_window(location);
            weight += problem.pickup_weight(location);

            if i == 0 {
                clock = window.start_seconds() + self.pickup_duration_seconds;
                duration += self.pickup_duration_seconds;
                fined_duration += self.pickup_duration_seconds;
                continue;
            }

            let leg = problem.duration(locations[i - 1], location);
            duration += leg;
            fined_duration += leg;
            clock += leg;

            if clock < window.start_seconds() {
                clock = window.start_seconds();
            } else if clock > window.finish_seconds() {
                fined_duration += (clock - window.finish_seconds()) * self.lateness_penalty_factor;
            }

            if let Some(capacity) = capacity {
                if weight > capacity {
                    fined_duration += (weight - capacity) * leg;
                }
            }
        }

        RouteCost {
            duration_seconds: duration,
            fined_duration_seconds: fined_duration,
            total_weight_kg: weight,
        }
    }

    /// Evaluate a route and attach its cost. A route can only be evaluated once.
    pub fn evaluate(&self, route: &mut Route) -> Result<(), RouteError> {
        if route.is_evaluated() {
            return Err(RouteError::AlreadyEvaluated);
        }

        let location_count = self.problem.location_count();
        if let Some(&location) = route
            .locations()
            .iter()
            .find(|&&location| location >= location_count)
        {
            return Err(RouteError::UnknownLocation {
                location,
                location_count,
            });
        }

        let cost = self.cost_of(route.locations());
        route.set_cost(cost)
    }

    /// Decode a solution space and evaluate every route that has no cost yet.
    pub fn evaluate_space(&self, space: &mut SolutionSpace) -> Result<(), RouteError> {
        for route in space.decode_routes() {
            if !route.is_evaluated() {
                self.evaluate(route)?;
            }
        }
        Ok(())
    }
}
