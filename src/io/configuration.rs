//! Solver constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum accepted matrix dimension
pub const MAX_MATRIX_DIMENSION: usize = 5_000;

// Exhaustive search enumerates n! permutations
/// Largest dimension accepted by the exhaustive cross-check
pub const MAX_EXHAUSTIVE_DIMENSION: usize = 9;

// Default values for configurable parameters
/// Fixed seed for reproducible random matrices
pub const DEFAULT_SEED: u64 = 42;

/// Default largest entry of a generated matrix
pub const DEFAULT_MAX_COST: i64 = 100;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Input and output settings
/// Extension of matrix input files
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_assignment";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
