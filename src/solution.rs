//! Solution representation: routes and the per-executor solution space.

use crate::error::{RouteError, SolutionError};
use crate::problem::DEPOT;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;

/// Evaluation results of a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteCost {
    /// Loading time plus travel time, without penalties
    pub duration_seconds: u64,
    /// Duration including lateness and overweight penalties
    pub fined_duration_seconds: u64,
    /// Total weight picked up along the route
    pub total_weight_kg: u64,
}

impl RouteCost {
    /// Penalty part of the fined duration.
    pub fn fine_seconds(&self) -> u64 {
        self.fined_duration_seconds - self.duration_seconds
    }
}

/// An ordered sequence of locations served by one executor.
///
/// The first location is the depot. The cost is attached exactly once by the
/// [`Evaluator`](crate::evaluator::Evaluator); reading it earlier is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    locations: Vec<usize>,
    #[serde(skip_deserializing)]
    cost: Option<RouteCost>,
}

impl Route {
    /// Create a new, unevaluated route.
    pub fn new(locations: Vec<usize>) -> Self {
        Route {
            locations,
            cost: None,
        }
    }

    pub fn locations(&self) -> &[usize] {
        &self.locations
    }

    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    /// Attach evaluation results. Fails if the route already carries a cost.
    pub(crate) fn set_cost(&mut self, cost: RouteCost) -> Result<(), RouteError> {
        if self.cost.is_some() {
            return Err(RouteError::AlreadyEvaluated);
        }
        self.cost = Some(cost);
        Ok(())
    }

    pub fn cost(&self) -> Result<&RouteCost, RouteError> {
        self.cost.as_ref().ok_or(RouteError::NotEvaluated)
    }

    pub fn duration_seconds(&self) -> Result<u64, RouteError> {
        self.cost().map(|cost| cost.duration_seconds)
    }

    pub fn fined_duration_seconds(&self) -> Result<u64, RouteError> {
        self.cost().map(|cost| cost.fined_duration_seconds)
    }

    pub fn total_weight_kg(&self) -> Result<u64, RouteError> {
        self.cost().map(|cost| cost.total_weight_kg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    duration_seconds: u64,
    fined_duration_seconds: u64,
}

/// A complete candidate solution.
///
/// One row per executor. Column 0 of every row is the depot slot; the other
/// cells either hold a location or are empty. A row decodes to a route made of
/// the depot followed by its non-empty cells in column order, and rows without
/// any location decode to no route (executor unused).
///
/// Decoded routes and their aggregated costs are cached and dropped whenever a
/// cell changes.
#[derive(Clone)]
pub struct SolutionSpace {
    rows: Vec<Vec<Option<usize>>>,
    routes: Option<Vec<Route>>,
    totals: OnceCell<Totals>,
}

impl SolutionSpace {
    /// Build a solution space from concrete routes, padded with empty rows up
    /// to `max_executors` rows.
    ///
    /// All rows share the width of the longest route. The given routes become
    /// the decoded route cache, so evaluated routes keep their costs. Fails if
    /// there are more routes than executors or a route does not start at the
    /// depot.
    pub fn new(routes: Vec<Route>, max_executors: usize) -> Result<Self, SolutionError> {
        if routes.len() > max_executors {
            return Err(SolutionError::TooManyRoutes {
                routes: routes.len(),
                executors: max_executors,
            });
        }
        if let Some(route) = routes
            .iter()
            .position(|route| route.locations().first() != Some(&DEPOT))
        {
            return Err(SolutionError::MissingDepot { route });
        }

        let width = routes.iter().map(Route::len).max().unwrap_or(0).max(1);

        let mut rows: Vec<Vec<Option<usize>>> = routes
            .iter()
            .map(|route| route.locations().iter().copied().map(Some).collect())
            .collect();

        while rows.len() < max_executors {
            rows.push(vec![Some(DEPOT)]);
        }
        for row in &mut rows {
            row.resize(width, None);
        }

        let routes = routes.into_iter().filter(|route| route.len() > 1).collect();

        Ok(SolutionSpace {
            rows,
            routes: Some(routes),
            totals: OnceCell::new(),
        })
    }

    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.rows
    }

    /// Number of executor rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in every row, depot slot included.
    pub fn row_len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<usize> {
        self.rows[row][column]
    }

    /// Overwrite one cell and invalidate the decoded routes and totals.
    pub fn set_cell(&mut self, location: Option<usize>, column: usize, row: usize) {
        self.routes = None;
        self.totals = OnceCell::new();
        self.rows[row][column] = location;
    }

    /// Every location assigned to a mutable cell, row by row.
    pub fn assigned_locations(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.iter().skip(1).flatten().copied())
    }

    /// Decode the rows into routes, reusing the cache when it is valid.
    pub fn decode_routes(&mut self) -> &mut [Route] {
        let rows = &self.rows;
        self.routes
            .get_or_insert_with(|| rows.iter().filter_map(|row| decode_row(row)).collect())
    }

    /// Decoded routes. Fails if the rows changed since the last decoding.
    pub fn routes(&self) -> Result<&[Route], SolutionError> {
        self.routes.as_deref().ok_or(SolutionError::NotDecoded)
    }

    /// Number of executors with a route.
    pub fn route_count(&self) -> Result<usize, SolutionError> {
        self.routes().map(<[Route]>::len)
    }

    /// Sum of route durations, without penalties.
    pub fn duration_seconds(&self) -> Result<u64, SolutionError> {
        self.totals().map(|totals| totals.duration_seconds)
    }

    /// Sum of fined route durations.
    pub fn fined_duration_seconds(&self) -> Result<u64, SolutionError> {
        self.totals().map(|totals| totals.fined_duration_seconds)
    }

    /// Whether any route carries a lateness or overweight penalty.
    pub fn has_fine(&self) -> Result<bool, SolutionError> {
        let totals = self.totals()?;
        Ok(totals.fined_duration_seconds > totals.duration_seconds)
    }

    fn totals(&self) -> Result<Totals, SolutionError> {
        if let Some(totals) = self.totals.get() {
            return Ok(*totals);
        }

        let mut totals = Totals {
            duration_seconds: 0,
            fined_duration_seconds: 0,
        };
        for route in self.routes()? {
            let cost = route.cost()?;
            totals.duration_seconds += cost.duration_seconds;
            totals.fined_duration_seconds += cost.fined_duration_seconds;
        }

        let _ = self.totals.set(totals);
        Ok(totals)
    }
}

/// Decode one row: the depot followed by every non-empty cell after column 0.
fn decode_row(row: &[Option<usize>]) -> Option<Route> {
    let mut locations = Vec::with_capacity(row.len());
    locations.push(DEPOT);
    locations.extend(row.iter().skip(1).flatten().copied());

    if locations.len() > 1 {
        Some(Route::new(locations))
    } else {
        None
    }
}

impl fmt::Debug for SolutionSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SolutionSpace:")?;
        match self.fined_duration_seconds() {
            Ok(fined) => writeln!(f, "  Fined Duration: {}", fined)?,
            Err(_) => writeln!(f, "  Fined Duration: not evaluated")?,
        }
        writeln!(f, "  Rows: {}", self.rows.len())?;

        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "  Row {}: [", i)?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match cell {
                    Some(location) => write!(f, "{}", location)?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f, "]")?;
        }

        Ok(())
    }
}
