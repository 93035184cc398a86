//! Bipartite graph phases: zero-edge graph, maximum matching and line cover

/// Zero-cost bipartite graph construction
pub mod bipartite;
/// Fixed-size vertex sets for visited marks and covered lines
pub mod bitset;
/// Minimum line cover via alternating reachability
pub mod cover;
/// Kuhn's maximum matching
pub mod matching;

pub use bipartite::BipartiteGraph;
pub use cover::LineCover;
pub use matching::Matching;
