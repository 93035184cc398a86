//! Tests for brute-force optimum search and result verification

#[cfg(test)]
mod tests {
    use hungarian::algorithm::exhaustive::{exhaustive_minimum, verify_assignment};
    use hungarian::algorithm::solver::solve;
    use hungarian::graph::BipartiteGraph;
    use hungarian::graph::matching::maximum_matching;
    use hungarian::io::configuration::MAX_EXHAUSTIVE_DIMENSION;
    use hungarian::io::generator::random_matrix;
    use hungarian::matrix::CostMatrix;
    use hungarian::{Assignment, AssignmentError};

    // Tests the optimum of a known matrix
    // Verified by keeping the last permutation instead of the cheapest
    #[test]
    fn test_known_minimum() {
        let costs =
            CostMatrix::from_rows(vec![vec![9_i64, 2, 7], vec![6, 4, 3], vec![5, 8, 1]]).unwrap();
        let optimum = exhaustive_minimum(&costs).unwrap();
        assert_eq!(optimum.total_cost, 9);
        assert_eq!(optimum.row_to_column, vec![1, 0, 2]);
    }

    // Tests every permutation is visited exactly once
    // Verified by stopping the outer loop one position early
    #[test]
    fn test_permutation_count() {
        for (dimension, expected) in [(1, 1), (2, 2), (3, 6), (4, 24), (5, 120)] {
            let costs = random_matrix(dimension, 10, 1).unwrap();
            assert_eq!(exhaustive_minimum(&costs).unwrap().permutations, expected);
        }
    }

    // Tests the reported permutation achieves the reported cost
    // Verified by recording the cost before the swap
    #[test]
    fn test_reported_permutation_matches_cost() {
        for seed in 0..20 {
            let costs = random_matrix(5, 50, seed).unwrap();
            let optimum = exhaustive_minimum(&costs).unwrap();
            assert_eq!(costs.total_cost(&optimum.row_to_column).unwrap(), optimum.total_cost);
        }
    }

    // Tests large matrices are refused
    // Verified by removing the dimension limit
    #[test]
    fn test_dimension_limit() {
        let costs = random_matrix(MAX_EXHAUSTIVE_DIMENSION + 1, 10, 3).unwrap();
        assert!(matches!(
            exhaustive_minimum(&costs),
            Err(AssignmentError::InvalidParameter { .. })
        ));
    }

    // Tests a solver result verifies
    // Verified by comparing against the maximum permutation
    #[test]
    fn test_verify_accepts_optimal() {
        let costs = random_matrix(6, 30, 9).unwrap();
        let assignment = solve(&costs).unwrap();
        assert!(verify_assignment(&costs, &assignment).is_ok());
    }

    // Tests a suboptimal assignment is caught
    // Verified by skipping the optimum comparison
    #[test]
    fn test_verify_rejects_suboptimal() {
        let costs =
            CostMatrix::from_rows(vec![vec![9_i64, 2, 7], vec![6, 4, 3], vec![5, 8, 1]]).unwrap();
        let diagonal = BipartiteGraph::from_edges(3, 3, &[(0, 0), (1, 1), (2, 2)]).unwrap();
        let assignment: Assignment<i64> =
            Assignment::from_matching(&maximum_matching(&diagonal), &costs, 1, 0).unwrap();

        assert!(matches!(
            verify_assignment(&costs, &assignment),
            Err(AssignmentError::Computation { .. })
        ));
    }
}
