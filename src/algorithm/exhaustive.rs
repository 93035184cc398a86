//! Brute-force minimum over every permutation, for cross-checking small solves

use crate::algorithm::assignment::Assignment;
use crate::io::configuration::MAX_EXHAUSTIVE_DIMENSION;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::matrix::{Cost, CostMatrix};

/// Cheapest assignment found by enumerating all row-to-column permutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveOptimum<T> {
    /// Column assigned to each row in the first cheapest permutation
    pub row_to_column: Vec<usize>,
    /// Its total cost
    pub total_cost: T,
    /// Number of permutations evaluated
    pub permutations: usize,
}

/// Enumerate every permutation with Heap's algorithm and keep the cheapest
///
/// # Errors
///
/// Returns `InvalidParameter` above `MAX_EXHAUSTIVE_DIMENSION` and
/// `Overflow` if a permutation's cost exceeds `T`
pub fn exhaustive_minimum<T: Cost>(costs: &CostMatrix<T>) -> Result<ExhaustiveOptimum<T>> {
    let dimension = costs.dimension();
    if dimension > MAX_EXHAUSTIVE_DIMENSION {
        return Err(invalid_parameter(
            "dimension",
            &dimension,
            &format!("exhaustive search is limited to {MAX_EXHAUSTIVE_DIMENSION}"),
        ));
    }

    let mut permutation: Vec<usize> = (0..dimension).collect();
    let mut best = ExhaustiveOptimum {
        total_cost: costs.total_cost(&permutation)?,
        row_to_column: permutation.clone(),
        permutations: 1,
    };

    let mut counters = vec![0usize; dimension];
    let mut position = 1;
    while position < dimension {
        let counter = counters.get(position).copied().unwrap_or(0);
        if counter < position {
            let other = if position % 2 == 0 { 0 } else { counter };
            permutation.swap(other, position);

            let cost = costs.total_cost(&permutation)?;
            best.permutations += 1;
            if cost < best.total_cost {
                best.total_cost = cost;
                best.row_to_column.clone_from(&permutation);
            }

            if let Some(slot) = counters.get_mut(position) {
                *slot += 1;
            }
            position = 1;
        } else {
            if let Some(slot) = counters.get_mut(position) {
                *slot = 0;
            }
            position += 1;
        }
    }

    Ok(best)
}

/// Check a solver result against exhaustive search
///
/// # Errors
///
/// Returns `Computation` if the reported cost does not match the assigned
/// cells or is not the exhaustive minimum, and the errors of
/// [`exhaustive_minimum`]
pub fn verify_assignment<T: Cost>(costs: &CostMatrix<T>, assignment: &Assignment<T>) -> Result<()> {
    let recomputed = costs.total_cost(assignment.row_to_column())?;
    if recomputed != assignment.total_cost() {
        return Err(computation_error(
            "verification",
            &format!(
                "reported cost {} differs from assigned cells summing to {recomputed}",
                assignment.total_cost()
            ),
        ));
    }

    let optimum = exhaustive_minimum(costs)?;
    if optimum.total_cost != recomputed {
        return Err(computation_error(
            "verification",
            &format!(
                "assignment costs {recomputed} but the exhaustive minimum is {}",
                optimum.total_cost
            ),
        ));
    }

    Ok(())
}
