//! Tests for minimum line covers built from maximum matchings

#[cfg(test)]
mod tests {
    use hungarian::graph::BipartiteGraph;
    use hungarian::graph::bitset::VertexSet;
    use hungarian::graph::cover::{LineCover, minimum_line_cover};
    use hungarian::graph::matching::maximum_matching;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cover_of(rows: usize, columns: usize, edges: &[(usize, usize)]) -> (BipartiteGraph, LineCover) {
        let graph = BipartiteGraph::from_edges(rows, columns, edges).unwrap();
        let matching = maximum_matching(&graph);
        let cover = minimum_line_cover(&graph, &matching);
        (graph, cover)
    }

    // Tests line counts through cells
    // Verified by counting only row lines
    #[test]
    fn test_line_count() {
        let mut rows = VertexSet::new(3);
        rows.insert(0);
        let mut columns = VertexSet::new(3);
        columns.insert(2);
        let cover = LineCover::new(rows, columns);

        assert_eq!(cover.size(), 2);
        assert_eq!(cover.line_count(0, 2), 2);
        assert_eq!(cover.line_count(0, 1), 1);
        assert_eq!(cover.line_count(1, 2), 1);
        assert_eq!(cover.line_count(1, 1), 0);
    }

    // Tests an edgeless graph needs no lines
    // Verified by covering every row by default
    #[test]
    fn test_empty_graph_cover() {
        let (graph, cover) = cover_of(3, 3, &[]);
        assert_eq!(cover.size(), 0);
        assert!(cover.covers_all_edges(&graph));
    }

    // Tests a shared column is covered by one column line
    // Verified by covering matched rows instead of reached columns
    #[test]
    fn test_single_column_cover() {
        let (graph, cover) = cover_of(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(cover.size(), 1);
        assert!(cover.covers_column(0));
        assert!(cover.rows().is_empty());
        assert!(cover.covers_all_edges(&graph));
    }

    // Tests a mix of row and column lines on the reduced worked example
    // Verified by skipping matched-edge traversal back to rows
    #[test]
    fn test_row_and_column_cover() {
        // zeros of [[0,0,0],[0,1,2],[0,2,4]]
        let (graph, cover) = cover_of(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);
        assert_eq!(cover.size(), 2);
        assert_eq!(cover.rows().to_vec(), vec![0]);
        assert_eq!(cover.columns().to_vec(), vec![0]);
        assert!(cover.covers_all_edges(&graph));
    }

    // Tests a perfect matching yields a full cover
    // Verified by returning reached rows instead of their complement
    #[test]
    fn test_perfect_matching_cover() {
        let (graph, cover) = cover_of(2, 2, &[(0, 0), (1, 1)]);
        assert_eq!(cover.size(), 2);
        assert!(cover.covers_all_edges(&graph));
    }

    // Tests covers_all_edges detects a missed edge
    // Verified by ignoring column coverage
    #[test]
    fn test_covers_all_edges_detects_gap() {
        let graph = BipartiteGraph::from_edges(2, 2, &[(0, 0), (1, 1)]).unwrap();
        let mut rows = VertexSet::new(2);
        rows.insert(0);
        let cover = LineCover::new(rows, VertexSet::new(2));
        assert!(!cover.covers_all_edges(&graph));
    }

    // Tests cover size equals matching size on random graphs
    // Verified by starting traversal from matched rows
    #[test]
    fn test_konig_equality_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let rows = rng.random_range(1..=8);
            let columns = rng.random_range(1..=8);
            let mut edges = Vec::new();
            for row in 0..rows {
                for col in 0..columns {
                    if rng.random_bool(0.3) {
                        edges.push((row, col));
                    }
                }
            }
            let graph = BipartiteGraph::from_edges(rows, columns, &edges).unwrap();
            let matching = maximum_matching(&graph);
            let cover = minimum_line_cover(&graph, &matching);

            assert_eq!(cover.size(), matching.size());
            assert!(cover.covers_all_edges(&graph));
        }
    }
}
