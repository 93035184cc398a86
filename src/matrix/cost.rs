//! Square cost matrix storage with row and column reduction
//!
//! The matrix validates its shape and sign on construction so every later
//! phase can assume a well-formed square, non-negative input.

use crate::io::configuration::MAX_MATRIX_DIMENSION;
use crate::io::error::{AssignmentError, Result, invalid_parameter};
use ndarray::{Array2, ArrayView2};
use num_traits::{NumAssign, PrimInt};
use std::fmt;
use std::str::FromStr;

/// Integer type usable as an assignment cost
pub trait Cost: PrimInt + NumAssign + fmt::Debug + fmt::Display + FromStr {}

impl<T> Cost for T where T: PrimInt + NumAssign + fmt::Debug + fmt::Display + FromStr {}

/// Square matrix of non-negative costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix<T> {
    entries: Array2<T>,
}

impl<T: Cost> CostMatrix<T> {
    /// Build a matrix from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, ragged, not square,
    /// larger than `MAX_MATRIX_DIMENSION`, or contains a negative cost
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let dimension = rows.len();
        validate_dimension(dimension)?;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != dimension {
                return Err(AssignmentError::NotSquare {
                    row,
                    expected: dimension,
                    found: values.len(),
                });
            }
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let entries = Array2::from_shape_vec((dimension, dimension), flat).map_err(|error| {
            AssignmentError::Computation {
                operation: "matrix construction",
                reason: error.to_string(),
            }
        })?;

        Self::from_array(entries)
    }

    /// Wrap an existing array after validating it
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty, not square, larger than
    /// `MAX_MATRIX_DIMENSION`, or contains a negative cost
    pub fn from_array(entries: Array2<T>) -> Result<Self> {
        let (rows, cols) = entries.dim();
        validate_dimension(rows)?;

        if rows != cols {
            return Err(AssignmentError::NotSquare {
                row: 0,
                expected: rows,
                found: cols,
            });
        }

        if let Some(((row, col), value)) = entries
            .indexed_iter()
            .find(|(_, value)| **value < T::zero())
        {
            return Err(AssignmentError::NegativeCost {
                row,
                col,
                value: value.to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.entries.nrows()
    }

    /// Entry at the given position
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get((row, col)).copied()
    }

    /// Read-only view of all entries
    pub fn entries(&self) -> ArrayView2<'_, T> {
        self.entries.view()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Array2<T> {
        &mut self.entries
    }

    /// Test whether the entry at the given position is exactly zero
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|value| value.is_zero())
    }

    /// Count zero entries across the whole matrix
    pub fn zero_count(&self) -> usize {
        self.entries.iter().filter(|value| value.is_zero()).count()
    }

    /// Subtract each row's minimum from every entry of that row
    pub fn row_reduce(&mut self) {
        for mut row in self.entries.rows_mut() {
            if let Some(min) = row.iter().copied().min() {
                row.map_inplace(|value| *value -= min);
            }
        }
    }

    /// Subtract each column's minimum from every entry of that column
    pub fn column_reduce(&mut self) {
        for mut column in self.entries.columns_mut() {
            if let Some(min) = column.iter().copied().min() {
                column.map_inplace(|value| *value -= min);
            }
        }
    }

    /// Row reduction followed by column reduction
    ///
    /// Afterwards every row and every column holds at least one zero.
    pub fn reduce(&mut self) {
        self.row_reduce();
        self.column_reduce();
    }

    /// Sum the entries selected by a row-to-column assignment
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment length differs from the dimension,
    /// a column is out of range, or the sum overflows `T`
    pub fn total_cost(&self, row_to_column: &[usize]) -> Result<T> {
        if row_to_column.len() != self.dimension() {
            return Err(invalid_parameter(
                "row_to_column",
                &row_to_column.len(),
                &format!("expected {} assigned rows", self.dimension()),
            ));
        }

        let mut total = T::zero();
        for (row, &col) in row_to_column.iter().enumerate() {
            let value = self.get(row, col).ok_or_else(|| {
                invalid_parameter("row_to_column", &col, &"column index out of range")
            })?;
            total = total
                .checked_add(&value)
                .ok_or(AssignmentError::Overflow {
                    operation: "total cost",
                })?;
        }

        Ok(total)
    }
}

fn validate_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(AssignmentError::EmptyMatrix);
    }
    if dimension > MAX_MATRIX_DIMENSION {
        return Err(AssignmentError::DimensionTooLarge {
            dimension,
            max: MAX_MATRIX_DIMENSION,
        });
    }
    Ok(())
}
