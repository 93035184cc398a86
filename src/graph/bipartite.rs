//! Bipartite row/column graph derived from the zero entries of a cost matrix

use crate::io::error::{AssignmentError, Result};
use crate::matrix::{Cost, CostMatrix};

/// Adjacency lists from row vertices to column vertices
///
/// Each row keeps its neighbours in insertion order; graphs built from a
/// cost matrix list them in ascending column order. The graph is a
/// disposable view and is rebuilt whenever the matrix changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    columns: usize,
    adjacency: Vec<Vec<usize>>,
}

impl BipartiteGraph {
    /// Create a graph with no edges
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            adjacency: vec![Vec::new(); rows],
        }
    }

    /// Create a graph from `(row, column)` edge pairs
    ///
    /// # Errors
    ///
    /// Returns an error if any endpoint lies outside the graph
    pub fn from_edges(rows: usize, columns: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(rows, columns);
        for &(row, col) in edges {
            graph.add_edge(row, col)?;
        }
        Ok(graph)
    }

    /// Create the graph of zero-cost cells, one edge per zero entry
    pub fn from_zero_entries<T: Cost>(matrix: &CostMatrix<T>) -> Self {
        let adjacency = matrix
            .entries()
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_zero())
                    .map(|(col, _)| col)
                    .collect()
            })
            .collect();

        Self {
            columns: matrix.dimension(),
            adjacency,
        }
    }

    /// Add an edge from a row to a column
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint lies outside the graph
    pub fn add_edge(&mut self, row: usize, col: usize) -> Result<()> {
        let rows = self.rows();
        let columns = self.columns;
        match self.adjacency.get_mut(row) {
            Some(neighbors) if col < columns => {
                neighbors.push(col);
                Ok(())
            }
            _ => Err(AssignmentError::InvalidEdge {
                row,
                col,
                rows,
                columns,
            }),
        }
    }

    /// Number of row (left) vertices
    pub fn rows(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of column (right) vertices
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Columns adjacent to a row, empty for unknown rows
    pub fn neighbors(&self, row: usize) -> &[usize] {
        self.adjacency.get(row).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Test whether an edge connects the row and column
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.neighbors(row).contains(&col)
    }
}
