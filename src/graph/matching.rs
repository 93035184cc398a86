//! Maximum bipartite matching by Kuhn's augmenting-path search
//!
//! The depth-first search runs on an explicit frame stack instead of native
//! recursion. An augmenting path never holds more rows than the graph has,
//! so the stack is bounded by the row count.

use crate::graph::bipartite::BipartiteGraph;
use crate::graph::bitset::VertexSet;

/// Pairing between row vertices and column vertices
///
/// Both directions are stored so lookups are O(1) either way. Every
/// assignment writes exactly one slot per side, which keeps the pairing
/// injective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    column_to_row: Vec<Option<usize>>,
    row_to_column: Vec<Option<usize>>,
}

impl Matching {
    /// Create a matching with every vertex unmatched
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            column_to_row: vec![None; columns],
            row_to_column: vec![None; rows],
        }
    }

    /// Number of matched pairs
    pub fn size(&self) -> usize {
        self.row_to_column.iter().flatten().count()
    }

    /// Row matched to a column
    pub fn row_of(&self, col: usize) -> Option<usize> {
        self.column_to_row.get(col).copied().flatten()
    }

    /// Column matched to a row
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.row_to_column.get(row).copied().flatten()
    }

    /// Test whether a row takes part in the matching
    pub fn is_row_matched(&self, row: usize) -> bool {
        self.column_of(row).is_some()
    }

    /// Column-indexed view, `None` marks an unmatched column
    pub fn column_to_row(&self) -> &[Option<usize>] {
        &self.column_to_row
    }

    /// Row-indexed view, `None` marks an unmatched row
    pub fn row_to_column(&self) -> &[Option<usize>] {
        &self.row_to_column
    }

    /// Matched `(row, column)` pairs in ascending column order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.column_to_row
            .iter()
            .enumerate()
            .filter_map(|(col, row)| row.map(|row| (row, col)))
    }

    /// Test whether every row and every column is matched
    pub fn is_perfect(&self) -> bool {
        let size = self.size();
        size == self.row_to_column.len() && size == self.column_to_row.len()
    }

    fn assign(&mut self, row: usize, col: usize) {
        if let Some(slot) = self.column_to_row.get_mut(col) {
            *slot = Some(row);
        }
        if let Some(slot) = self.row_to_column.get_mut(row) {
            *slot = Some(col);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    row: usize,
    next_edge: usize,
}

/// Kuhn's algorithm over a borrowed bipartite graph
///
/// Keeps its matching between runs: calling
/// [`find_maximum_matching`](Self::find_maximum_matching) again only
/// retries rows that are still unmatched, so a maximum matching is left
/// unchanged.
#[derive(Debug)]
pub struct KuhnMatcher<'g> {
    graph: &'g BipartiteGraph,
    matching: Matching,
    visited: VertexSet,
    stack: Vec<Frame>,
}

impl<'g> KuhnMatcher<'g> {
    /// Create a matcher with an empty matching
    pub fn new(graph: &'g BipartiteGraph) -> Self {
        Self {
            graph,
            matching: Matching::empty(graph.rows(), graph.columns()),
            visited: VertexSet::new(graph.columns()),
            stack: Vec::with_capacity(graph.rows().saturating_add(1)),
        }
    }

    /// Attempt an augmenting path from every unmatched row in increasing order
    pub fn find_maximum_matching(&mut self) -> &Matching {
        for row in 0..self.graph.rows() {
            self.augment(row);
        }
        tracing::trace!(
            size = self.matching.size(),
            rows = self.graph.rows(),
            columns = self.graph.columns(),
            "maximum matching found"
        );
        &self.matching
    }

    /// Search one augmenting path starting at `root`
    ///
    /// Visited marks are cleared first and shared by the whole search, so
    /// no column is explored twice within this attempt. Returns `true` when
    /// the matching grew; an already matched root returns `false` without
    /// searching.
    pub fn augment(&mut self, root: usize) -> bool {
        if root >= self.graph.rows() || self.matching.is_row_matched(root) {
            return false;
        }

        self.visited.clear();
        self.stack.clear();
        self.stack.push(Frame {
            row: root,
            next_edge: 0,
        });

        while let Some(frame) = self.stack.last_mut() {
            let Some(&col) = self.graph.neighbors(frame.row).get(frame.next_edge) else {
                self.stack.pop();
                continue;
            };
            frame.next_edge += 1;

            if !self.visited.insert(col) {
                continue;
            }

            match self.matching.row_of(col) {
                None => {
                    self.flip_path(col);
                    return true;
                }
                Some(owner) => self.stack.push(Frame {
                    row: owner,
                    next_edge: 0,
                }),
            }
        }

        false
    }

    /// Current matching
    pub const fn matching(&self) -> &Matching {
        &self.matching
    }

    /// Consume the matcher, keeping its matching
    pub fn into_matching(self) -> Matching {
        self.matching
    }

    // The stack holds exactly the rows of the alternating path, root at the
    // bottom. Each row takes the column its child reached and releases its
    // previous column to the row below.
    fn flip_path(&mut self, free_col: usize) {
        let mut col = free_col;
        while let Some(frame) = self.stack.pop() {
            let released = self.matching.column_of(frame.row);
            self.matching.assign(frame.row, col);
            match released {
                Some(previous) => col = previous,
                None => break,
            }
        }
        self.stack.clear();
    }
}

/// Compute a maximum matching of the graph
pub fn maximum_matching(graph: &BipartiteGraph) -> Matching {
    let mut matcher = KuhnMatcher::new(graph);
    matcher.find_maximum_matching();
    matcher.into_matching()
}
