//! Solver control loop and its results

/// Optimal row/column pairing returned by a solve
pub mod assignment;
/// Brute-force permutation search for verifying small solves
pub mod exhaustive;
/// Reduction, matching, cover and adjustment state machine
pub mod solver;
