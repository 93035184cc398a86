//! Square assignment solver built on the Hungarian method
//!
//! The solver reduces the cost matrix, then alternates maximum bipartite
//! matching on zero-cost cells (Kuhn's algorithm) with a minimum line cover
//! derived from that matching (König's theorem), adjusting the matrix until
//! the cover needs one line per row.

#![forbid(unsafe_code)]

/// Control loop, solver output and exhaustive cross-checking
pub mod algorithm;
/// Zero-cost bipartite graph, maximum matching and line cover
pub mod graph;
/// Input/output operations and error handling
pub mod io;
/// Cost matrix storage, reduction and adjustment
pub mod matrix;

pub use algorithm::assignment::Assignment;
pub use algorithm::solver::{AssignmentSolver, SolverConfig, solve};
pub use io::error::{AssignmentError, Result};
pub use matrix::{Cost, CostMatrix};
