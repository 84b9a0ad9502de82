//! Error types raised by the route builder.

use std::fmt;
use std::io;

/// Misuse of a [`Route`](crate::solution::Route) cost cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteError {
    /// The route was already evaluated; costs are write-once.
    AlreadyEvaluated,
    /// A cost was requested from a route that was never evaluated.
    NotEvaluated,
    /// The route visits a location the problem does not know.
    UnknownLocation { location: usize, location_count: usize },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::AlreadyEvaluated => write!(f, "Evaluation requested for an evaluated route"),
            RouteError::NotEvaluated => write!(f, "Cost requested from a route that is not evaluated"),
            RouteError::UnknownLocation {
                location,
                location_count,
            } => write!(
                f,
                "Route visits location {} but the problem has {} locations",
                location, location_count
            ),
        }
    }
}

impl std::error::Error for RouteError {}

/// Aggregate access on a [`SolutionSpace`](crate::solution::SolutionSpace) that is not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionError {
    /// The routes of the solution space have not been decoded yet.
    NotDecoded,
    /// A decoded route has not been evaluated.
    Route(RouteError),
    /// More routes than executors.
    TooManyRoutes { routes: usize, executors: usize },
    /// The route at this position does not start at the depot.
    MissingDepot { route: usize },
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionError::NotDecoded => write!(f, "Totals requested before routes were decoded"),
            SolutionError::Route(err) => write!(f, "Totals requested from unevaluated routes: {}", err),
            SolutionError::TooManyRoutes { routes, executors } => write!(
                f,
                "{} routes do not fit on {} executors",
                routes, executors
            ),
            SolutionError::MissingDepot { route } => {
                write!(f, "Route {} does not start at the depot", route)
            }
        }
    }
}

impl std::error::Error for SolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolutionError::Route(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RouteError> for SolutionError {
    fn from(err: RouteError) -> Self {
        SolutionError::Route(err)
    }
}

/// The mutator could not produce a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationError {
    /// Rows have no mutable column (only the depot slot).
    RowTooShort,
    /// Every sampled second cell held the same value as the first one.
    NoEligibleNeighbor { row_limit: usize, attempts: usize },
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::RowTooShort => write!(f, "Rows have no mutable column"),
            MutationError::NoEligibleNeighbor {
                row_limit,
                attempts,
            } => write!(
                f,
                "No eligible mutation within row limit {} after {} attempts",
                row_limit, attempts
            ),
        }
    }
}

impl std::error::Error for MutationError {}

/// Invalid or unreadable problem input.
#[derive(Debug)]
pub enum ProblemError {
    /// The fleet must hold at least one executor.
    EmptyFleet,
    /// Time windows are not index-aligned with the duration matrix.
    TimeWindowCount { expected: usize, found: usize },
    /// A row of the duration matrix has the wrong length.
    MatrixShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// More pickup weights than locations.
    PickupWeightCount { expected: usize, found: usize },
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::EmptyFleet => write!(f, "At least one executor is required"),
            ProblemError::TimeWindowCount { expected, found } => write!(
                f,
                "Expected {} time windows, found {}",
                expected, found
            ),
            ProblemError::MatrixShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "Duration matrix row {} has {} entries, expected {}",
                row, found, expected
            ),
            ProblemError::PickupWeightCount { expected, found } => write!(
                f,
                "Expected at most {} pickup weights, found {}",
                expected, found
            ),
            ProblemError::Io(err) => write!(f, "Cannot read problem: {}", err),
            ProblemError::Json(err) => write!(f, "Cannot parse problem: {}", err),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Io(err) => Some(err),
            ProblemError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProblemError {
    fn from(err: io::Error) -> Self {
        ProblemError::Io(err)
    }
}

impl From<serde_json::Error> for ProblemError {
    fn from(err: serde_json::Error) -> Self {
        ProblemError::Json(err)
    }
}

/// Failure raised while building routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildError {
    Route(RouteError),
    Solution(SolutionError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Route(err) => write!(f, "Route build failed: {}", err),
            BuildError::Solution(err) => write!(f, "Route build failed: {}", err),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Route(err) => Some(err),
            BuildError::Solution(err) => Some(err),
        }
    }
}

impl From<RouteError> for BuildError {
    fn from(err: RouteError) -> Self {
        BuildError::Route(err)
    }
}

impl From<SolutionError> for BuildError {
    fn from(err: SolutionError) -> Self {
        BuildError::Solution(err)
    }
}
