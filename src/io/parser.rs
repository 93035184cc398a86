//! Text input for cost matrices
//!
//! The first non-blank line holds the dimension `n`; the next `n` non-blank
//! lines hold `n` whitespace-separated costs each. Only blank lines may
//! follow the last row.

use crate::io::configuration::MAX_MATRIX_DIMENSION;
use crate::io::error::{AssignmentError, Result, file_system_error};
use crate::matrix::{Cost, CostMatrix};
use std::path::Path;

/// Parse a cost matrix from its textual form
///
/// # Errors
///
/// Returns `Parse` for a missing or malformed size line, unparsable costs,
/// missing rows or trailing content; `NotSquare` for rows of the wrong
/// length; and the validation errors of [`CostMatrix::from_rows`]
pub fn parse_matrix<T: Cost>(input: &str) -> Result<CostMatrix<T>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    let (size_line, size_text) = lines.next().ok_or_else(|| AssignmentError::Parse {
        line: 1,
        reason: "missing matrix size".to_string(),
    })?;

    let dimension: usize = size_text.parse().map_err(|error| AssignmentError::Parse {
        line: size_line,
        reason: format!("invalid matrix size '{size_text}': {error}"),
    })?;

    if dimension > MAX_MATRIX_DIMENSION {
        return Err(AssignmentError::DimensionTooLarge {
            dimension,
            max: MAX_MATRIX_DIMENSION,
        });
    }

    let mut rows = Vec::with_capacity(dimension);
    let mut last_line = size_line;
    for row in 0..dimension {
        let (line, text) = lines.next().ok_or_else(|| AssignmentError::Parse {
            line: last_line + 1,
            reason: format!("expected {dimension} rows, found {row}"),
        })?;
        last_line = line;

        let values = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<T>()
                    .ok()
                    .ok_or_else(|| AssignmentError::Parse {
                        line,
                        reason: format!("invalid cost '{token}'"),
                    })
            })
            .collect::<Result<Vec<T>>>()?;

        if values.len() != dimension {
            return Err(AssignmentError::NotSquare {
                row,
                expected: dimension,
                found: values.len(),
            });
        }
        rows.push(values);
    }

    if let Some((line, _)) = lines.next() {
        return Err(AssignmentError::Parse {
            line,
            reason: "unexpected content after the last row".to_string(),
        });
    }

    CostMatrix::from_rows(rows)
}

/// Read and parse a cost matrix file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise the errors
/// of [`parse_matrix`]
pub fn read_matrix<T: Cost>(path: &Path) -> Result<CostMatrix<T>> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| file_system_error(path, "read", source))?;
    parse_matrix(&text)
}
