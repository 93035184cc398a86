//! Minimum line cover from a maximum matching (constructive König)
//!
//! Starting at every unmatched row, an alternating traversal walks zero
//! edges to columns and matched edges back to rows. Reached rows together
//! with unreached columns form an independent set, so the unreached rows
//! and reached columns cover every edge. With a maximum matching the cover
//! has exactly as many lines as the matching has pairs.

use crate::graph::bipartite::BipartiteGraph;
use crate::graph::bitset::VertexSet;
use crate::graph::matching::Matching;

/// Covered rows and columns of a bipartite graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCover {
    rows: VertexSet,
    columns: VertexSet,
}

impl LineCover {
    /// Build a cover from explicit row and column sets
    pub const fn new(rows: VertexSet, columns: VertexSet) -> Self {
        Self { rows, columns }
    }

    /// Covered rows
    pub const fn rows(&self) -> &VertexSet {
        &self.rows
    }

    /// Covered columns
    pub const fn columns(&self) -> &VertexSet {
        &self.columns
    }

    /// Number of covering lines
    pub fn size(&self) -> usize {
        self.rows.count() + self.columns.count()
    }

    /// Test whether a row is covered
    pub fn covers_row(&self, row: usize) -> bool {
        self.rows.contains(row)
    }

    /// Test whether a column is covered
    pub fn covers_column(&self, col: usize) -> bool {
        self.columns.contains(col)
    }

    /// Number of lines through a cell: 0, 1 or 2
    pub fn line_count(&self, row: usize, col: usize) -> usize {
        usize::from(self.covers_row(row)) + usize::from(self.covers_column(col))
    }

    /// Test whether every edge of the graph touches a covered line
    pub fn covers_all_edges(&self, graph: &BipartiteGraph) -> bool {
        (0..graph.rows()).all(|row| {
            self.covers_row(row)
                || graph
                    .neighbors(row)
                    .iter()
                    .all(|&col| self.covers_column(col))
        })
    }
}

/// Compute a minimum line cover of the graph from a maximum matching
pub fn minimum_line_cover(graph: &BipartiteGraph, matching: &Matching) -> LineCover {
    let mut reached_rows = VertexSet::new(graph.rows());
    let mut reached_columns = VertexSet::new(graph.columns());
    let mut pending = Vec::new();

    for row in (0..graph.rows()).filter(|&row| !matching.is_row_matched(row)) {
        if reached_rows.insert(row) {
            pending.push(row);
        }
    }

    while let Some(row) = pending.pop() {
        for &col in graph.neighbors(row) {
            if !reached_columns.insert(col) {
                continue;
            }
            if let Some(next) = matching.row_of(col)
                && reached_rows.insert(next)
            {
                pending.push(next);
            }
        }
    }

    tracing::trace!(
        reached_rows = reached_rows.count(),
        reached_columns = reached_columns.count(),
        "alternating reachability complete"
    );

    LineCover::new(reached_rows.complement(), reached_columns)
}
