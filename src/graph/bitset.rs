use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of vertex indices on one side of a bipartite graph
///
/// Uses 0-based indexing matching row and column ids of the cost matrix.
/// Provides O(1) membership testing; indices outside the universe are
/// ignored on insert and reported absent on lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexSet {
    bits: BitVec,
}

impl VertexSet {
    /// Create a set with no vertices present
    pub fn new(universe: usize) -> Self {
        Self {
            bits: bitvec![0; universe],
        }
    }

    /// Create a set containing every vertex of the universe
    pub fn all(universe: usize) -> Self {
        Self {
            bits: bitvec![1; universe],
        }
    }

    /// Number of vertices the set can hold
    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    /// Insert a vertex, returning whether it was newly added
    pub fn insert(&mut self, vertex: usize) -> bool {
        if vertex >= self.bits.len() || self.contains(vertex) {
            return false;
        }
        self.bits.set(vertex, true);
        true
    }

    /// Test vertex membership
    pub fn contains(&self, vertex: usize) -> bool {
        self.bits.get(vertex).as_deref() == Some(&true)
    }

    /// Remove every vertex, keeping the universe size
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Create the set of vertices not present in this one
    #[must_use]
    pub fn complement(&self) -> Self {
        Self {
            bits: !self.bits.clone(),
        }
    }

    /// Test if no vertices are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count vertices in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present vertices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all vertex indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexSet({} of {}: {:?})", self.count(), self.universe(), self.to_vec())
    }
}
