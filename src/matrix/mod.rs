//! Cost matrix storage and the matrix-level phases of the solver
//!
//! This module contains:
//! - Validated square cost matrices with row and column reduction
//! - Adjustment of the matrix around an incomplete line cover

/// Minimum-uncovered rebalancing step
pub mod adjust;
/// Cost matrix storage and reduction
pub mod cost;

pub use cost::{Cost, CostMatrix};
