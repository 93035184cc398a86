//! Plain-text rendering of matrices, line covers and assignments for diagnostics

use crate::algorithm::assignment::Assignment;
use crate::graph::cover::LineCover;
use crate::matrix::{Cost, CostMatrix};

/// Marker printed beside covered rows and above covered columns
pub const COVER_MARKER: &str = "*";

fn cell_width<T: Cost>(matrix: &CostMatrix<T>) -> usize {
    matrix
        .entries()
        .iter()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1)
}

/// Render the matrix with right-aligned columns, one row per line
pub fn render_matrix<T: Cost>(matrix: &CostMatrix<T>) -> String {
    let width = cell_width(matrix);
    matrix
        .entries()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|value| format!("{value:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the matrix with covered lines marked
///
/// The first line marks covered columns; covered rows carry a trailing marker.
pub fn render_cover<T: Cost>(matrix: &CostMatrix<T>, cover: &LineCover) -> String {
    let width = cell_width(matrix);
    let header = (0..matrix.dimension())
        .map(|col| {
            let marker = if cover.covers_column(col) {
                COVER_MARKER
            } else {
                ""
            };
            format!("{marker:>width$}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![header.trim_end().to_string()];
    for (row, line) in render_matrix(matrix).lines().enumerate() {
        if cover.covers_row(row) {
            lines.push(format!("{line} {COVER_MARKER}"));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Render an assignment over its original costs
///
/// Assigned cells are bracketed, followed by one line per row and the total.
pub fn render_assignment<T: Cost>(costs: &CostMatrix<T>, assignment: &Assignment<T>) -> String {
    let width = cell_width(costs);
    let mut lines: Vec<String> = costs
        .entries()
        .rows()
        .into_iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    if assignment.column_of(row) == Some(col) {
                        format!("[{value:>width$}]")
                    } else {
                        format!(" {value:>width$} ")
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    lines.push(String::new());
    for (row, col) in assignment.pairs() {
        let cost = costs
            .get(row, col)
            .map_or_else(|| "?".to_string(), |value| value.to_string());
        lines.push(format!("row {row} -> column {col} (cost {cost})"));
    }
    lines.push(format!("total cost: {}", assignment.total_cost()));
    lines.push(format!(
        "iterations: {}, adjustments: {}",
        assignment.iterations(),
        assignment.adjustments()
    ));

    lines.join("\n")
}
