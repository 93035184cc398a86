use crate::graph::cover::LineCover;
use crate::io::error::{AssignmentError, Result, invariant_violation};
use crate::matrix::cost::{Cost, CostMatrix};

/// Smallest entry whose row and column are both uncovered
pub fn minimum_uncovered<T: Cost>(matrix: &CostMatrix<T>, cover: &LineCover) -> Option<T> {
    matrix
        .entries()
        .indexed_iter()
        .filter(|&((row, col), _)| cover.line_count(row, col) == 0)
        .map(|(_, &value)| value)
        .min()
}

/// Rebalance the matrix around an incomplete line cover
///
/// Subtracts the minimum uncovered value `h` from every uncovered entry
/// and adds it to every entry covered twice. Singly covered entries keep
/// their value. Returns `h`.
///
/// # Errors
///
/// Returns `InvariantViolation` if no entry is uncovered or an uncovered
/// entry is already zero, and `Overflow` if adding `h` exceeds `T`
pub fn adjust<T: Cost>(matrix: &mut CostMatrix<T>, cover: &LineCover) -> Result<T> {
    let h = minimum_uncovered(matrix, cover)
        .ok_or_else(|| invariant_violation("no uncovered entry while the cover is incomplete"))?;

    if h.is_zero() {
        return Err(invariant_violation("line cover leaves a zero entry uncovered"));
    }

    for ((row, col), value) in matrix.entries_mut().indexed_iter_mut() {
        match cover.line_count(row, col) {
            0 => *value -= h,
            2 => {
                *value = value.checked_add(&h).ok_or(AssignmentError::Overflow {
                    operation: "matrix adjustment",
                })?;
            }
            _ => {}
        }
    }

    Ok(h)
}
