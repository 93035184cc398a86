//! Seeded random cost matrices for demos, benchmarks and cross-checks

use crate::io::configuration::MAX_MATRIX_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::matrix::CostMatrix;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generate an `n`x`n` matrix with costs drawn uniformly from `0..=max_cost`
///
/// The same seed always yields the same matrix.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero or oversized dimension or a
/// negative `max_cost`
pub fn random_matrix(dimension: usize, max_cost: i64, seed: u64) -> Result<CostMatrix<i64>> {
    if dimension == 0 || dimension > MAX_MATRIX_DIMENSION {
        return Err(invalid_parameter(
            "dimension",
            &dimension,
            &format!("must be between 1 and {MAX_MATRIX_DIMENSION}"),
        ));
    }
    if max_cost < 0 {
        return Err(invalid_parameter(
            "max_cost",
            &max_cost,
            &"must not be negative",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let entries =
        Array2::from_shape_simple_fn((dimension, dimension), || rng.random_range(0..=max_cost));

    CostMatrix::from_array(entries)
}
