//! Neighborhood operator: swap two cells of a solution space.

use crate::error::MutationError;
use crate::solution::SolutionSpace;
use rand::Rng;

/// A cell of the solution space, as `(row, column)`.
pub type Cell = (usize, usize);

/// Exchange of the contents of two cells.
///
/// A swap inside one row reorders a route, a swap across rows moves locations
/// between executors. Applying the same swap twice restores the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    pub first: Cell,
    pub second: Cell,
}

impl Swap {
    /// Clone the solution space and swap the two cells in the copy.
    pub fn apply(&self, space: &SolutionSpace) -> SolutionSpace {
        let mut neighbor = space.clone();
        let (row1, col1) = self.first;
        let (row2, col2) = self.second;
        let location1 = space.cell(row1, col1);
        let location2 = space.cell(row2, col2);

        neighbor.set_cell(location1, col2, row2);
        neighbor.set_cell(location2, col1, row1);
        neighbor
    }
}

/// Produces random neighbors by swapping two cells.
pub struct Mutator {
    pub max_attempts: usize,
}

impl Mutator {
    /// Create a mutator that gives up after `max_attempts` draws of the second cell.
    pub fn new(max_attempts: usize) -> Self {
        Mutator { max_attempts }
    }

    /// Pick two cells with different contents in rows `0..=row_limit`.
    ///
    /// Column 0 (the depot slot) is never selected.
    pub fn propose<R: Rng>(
        &self,
        space: &SolutionSpace,
        row_limit: usize,
        rng: &mut R,
    ) -> Result<Swap, MutationError> {
        let row_len = space.row_len();
        if row_len < 2 || space.row_count() == 0 {
            return Err(MutationError::RowTooShort);
        }
        let row_limit = row_limit.min(space.row_count() - 1);

        let row1 = rng.gen_range(0..=row_limit);
        let col1 = rng.gen_range(1..row_len);
        let location1 = space.cell(row1, col1);

        for _ in 0..self.max_attempts {
            let row2 = rng.gen_range(0..=row_limit);
            let col2 = rng.gen_range(1..row_len);

            if space.cell(row2, col2) != location1 {
                return Ok(Swap {
                    first: (row1, col1),
                    second: (row2, col2),
                });
            }
        }

        Err(MutationError::NoEligibleNeighbor {
            row_limit,
            attempts: self.max_attempts,
        })
    }

    /// Produce a new solution space with exactly two cells swapped.
    pub fn mutate<R: Rng>(
        &self,
        space: &SolutionSpace,
        row_limit: usize,
        rng: &mut R,
    ) -> Result<SolutionSpace, MutationError> {
        let swap = self.propose(space, row_limit, rng)?;
        Ok(swap.apply(space))
    }
}
