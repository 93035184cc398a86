//! Error types and context management for assignment operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum AssignmentError {
    /// Cost matrix has no rows
    EmptyMatrix,

    /// A row's length differs from the number of rows
    ///
    /// Covers both ragged input and rectangular input, since the
    /// solver only accepts square matrices.
    NotSquare {
        /// Zero-based index of the offending row
        row: usize,
        /// Expected row length (the row count)
        expected: usize,
        /// Actual row length
        found: usize,
    },

    /// A cost entry is below zero
    NegativeCost {
        /// Row of the entry
        row: usize,
        /// Column of the entry
        col: usize,
        /// Rendered value of the entry
        value: String,
    },

    /// Matrix dimension exceeds the configured safety limit
    DimensionTooLarge {
        /// Requested dimension
        dimension: usize,
        /// Largest accepted dimension
        max: usize,
    },

    /// Textual matrix input could not be parsed
    Parse {
        /// One-based line number where parsing failed
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Edge endpoint lies outside the graph
    InvalidEdge {
        /// Row endpoint
        row: usize,
        /// Column endpoint
        col: usize,
        /// Number of row vertices
        rows: usize,
        /// Number of column vertices
        columns: usize,
    },

    /// An internal algorithm invariant did not hold
    ///
    /// Never expected for a validated square matrix; indicates a defect
    /// in one of the solver phases.
    InvariantViolation {
        /// Description of the broken invariant
        invariant: &'static str,
        /// Outer-loop iteration when the violation was detected
        iteration: usize,
    },

    /// Outer loop did not converge within its iteration budget
    IterationLimit {
        /// Iteration budget that was exhausted
        limit: usize,
        /// Matrix dimension
        dimension: usize,
    },

    /// Integer arithmetic overflowed the cost type
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A computed result failed verification
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => write!(f, "Cost matrix is empty"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Cost matrix is not square: row {row} has {found} entries, expected {expected}"
                )
            }
            Self::NegativeCost { row, col, value } => {
                write!(f, "Negative cost {value} at row {row}, column {col}")
            }
            Self::DimensionTooLarge { dimension, max } => {
                write!(f, "Matrix dimension {dimension} exceeds the limit of {max}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidEdge {
                row,
                col,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Edge ({row}, {col}) is outside a {rows}x{columns} bipartite graph"
                )
            }
            Self::InvariantViolation {
                invariant,
                iteration,
            } => {
                write!(
                    f,
                    "Invariant violated at iteration {iteration}: {invariant}"
                )
            }
            Self::IterationLimit { limit, dimension } => {
                write!(
                    f,
                    "No optimal assignment after {limit} iterations on a {dimension}x{dimension} matrix"
                )
            }
            Self::Overflow { operation } => {
                write!(f, "Arithmetic overflow during {operation}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AssignmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AssignmentError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current outer-loop iteration
    pub iteration: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with solver state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the iteration context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the iteration applied
    fn with_iteration(self, iteration: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AssignmentError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AssignmentError::InvariantViolation { iteration, .. } => {
                    if let Some(iter) = context.iteration {
                        *iteration = iter;
                    }
                }
                AssignmentError::Overflow { operation } => {
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_iteration(self, iteration: usize) -> Result<T> {
        self.with_context(ErrorContext {
            iteration: Some(iteration),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AssignmentError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AssignmentError {
    AssignmentError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AssignmentError {
    AssignmentError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invariant violation whose iteration is filled in later by [`WithContext`]
pub const fn invariant_violation(invariant: &'static str) -> AssignmentError {
    AssignmentError::InvariantViolation {
        invariant,
        iteration: 0,
    }
}

/// Create a file system error for a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AssignmentError {
    AssignmentError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
