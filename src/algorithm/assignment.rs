use crate::graph::matching::Matching;
use crate::io::error::{Result, invariant_violation};
use crate::matrix::{Cost, CostMatrix};

/// Optimal one-to-one pairing of rows and columns
///
/// Both directions are permutations of `0..n`. The total cost is summed
/// over the original, unreduced matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<T> {
    column_to_row: Vec<usize>,
    row_to_column: Vec<usize>,
    total_cost: T,
    iterations: usize,
    adjustments: usize,
}

impl<T: Cost> Assignment<T> {
    /// Build the assignment from a perfect matching
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the matching is not perfect for the
    /// matrix, and `Overflow` if the total cost exceeds `T`
    pub fn from_matching(
        matching: &Matching,
        original: &CostMatrix<T>,
        iterations: usize,
        adjustments: usize,
    ) -> Result<Self> {
        let dimension = original.dimension();
        if matching.column_to_row().len() != dimension || !matching.is_perfect() {
            return Err(invariant_violation("final matching is not perfect"));
        }

        let column_to_row = collect_complete(matching.column_to_row())?;
        let row_to_column = collect_complete(matching.row_to_column())?;
        let total_cost = original.total_cost(&row_to_column)?;

        Ok(Self {
            column_to_row,
            row_to_column,
            total_cost,
            iterations,
            adjustments,
        })
    }

    /// Row assigned to each column
    pub fn column_to_row(&self) -> &[usize] {
        &self.column_to_row
    }

    /// Column assigned to each row
    pub fn row_to_column(&self) -> &[usize] {
        &self.row_to_column
    }

    /// Row assigned to a column
    pub fn row_of(&self, col: usize) -> Option<usize> {
        self.column_to_row.get(col).copied()
    }

    /// Column assigned to a row
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.row_to_column.get(row).copied()
    }

    /// `(row, column)` pairs in row order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_column.iter().copied().enumerate()
    }

    /// Sum of original costs at the assigned cells
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Outer-loop iterations the solve took
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Matrix adjustments performed during the solve
    pub const fn adjustments(&self) -> usize {
        self.adjustments
    }

    /// Matrix dimension
    pub fn dimension(&self) -> usize {
        self.row_to_column.len()
    }
}

fn collect_complete(slots: &[Option<usize>]) -> Result<Vec<usize>> {
    slots
        .iter()
        .copied()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invariant_violation("final matching leaves a vertex unmatched"))
}
