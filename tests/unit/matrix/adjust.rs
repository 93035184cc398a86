//! Tests for minimum-uncovered adjustment of the cost matrix

#[cfg(test)]
mod tests {
    use hungarian::AssignmentError;
    use hungarian::graph::bitset::VertexSet;
    use hungarian::graph::cover::LineCover;
    use hungarian::matrix::CostMatrix;
    use hungarian::matrix::adjust::{adjust, minimum_uncovered};

    fn matrix(rows: &[&[i64]]) -> CostMatrix<i64> {
        CostMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect())
            .expect("valid test matrix")
    }

    fn cover(dimension: usize, rows: &[usize], columns: &[usize]) -> LineCover {
        let mut row_set = VertexSet::new(dimension);
        for &row in rows {
            row_set.insert(row);
        }
        let mut column_set = VertexSet::new(dimension);
        for &col in columns {
            column_set.insert(col);
        }
        LineCover::new(row_set, column_set)
    }

    fn rows_of(costs: &CostMatrix<i64>) -> Vec<Vec<i64>> {
        costs
            .entries()
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    // Tests uncovered entries drop by h and singly covered ones stay
    // Verified by subtracting h from covered entries as well
    #[test]
    fn test_adjust_single_column_cover() {
        let mut costs = matrix(&[&[0, 1, 2], &[0, 3, 4], &[0, 5, 6]]);
        let lines = cover(3, &[], &[0]);

        assert_eq!(minimum_uncovered(&costs, &lines), Some(1));
        let h = adjust(&mut costs, &lines).expect("adjustment");

        assert_eq!(h, 1);
        assert_eq!(
            rows_of(&costs),
            vec![vec![0, 0, 1], vec![0, 2, 3], vec![0, 4, 5]]
        );
    }

    // Tests doubly covered entries grow by h
    // Verified by leaving doubly covered entries unchanged
    #[test]
    fn test_adjust_doubly_covered_entries() {
        let mut costs = matrix(&[&[0, 0, 2], &[0, 3, 4], &[5, 0, 6]]);
        let lines = cover(3, &[0], &[0, 1]);

        let h = adjust(&mut costs, &lines).expect("adjustment");

        assert_eq!(h, 4);
        assert_eq!(
            rows_of(&costs),
            vec![vec![4, 4, 2], vec![0, 3, 0], vec![5, 0, 2]]
        );
    }

    // Tests a new zero appears where there was none before
    // Verified by adding h to uncovered entries
    #[test]
    fn test_adjust_creates_new_zero() {
        let mut costs = matrix(&[&[0, 7, 3], &[0, 9, 4], &[0, 8, 5]]);
        let before = costs.clone();
        let lines = cover(3, &[], &[0]);

        adjust(&mut costs, &lines).expect("adjustment");

        let new_zero = (0..3).any(|row| {
            (0..3).any(|col| costs.is_zero(row, col) && !before.is_zero(row, col))
        });
        assert!(new_zero);
        assert!(costs.entries().iter().all(|&value| value >= 0));
    }

    // Tests a cover with nothing uncovered is an invariant violation
    // Verified by returning zero when no uncovered entry exists
    #[test]
    fn test_adjust_without_uncovered_entries() {
        let mut costs = matrix(&[&[0, 1], &[1, 0]]);
        let lines = cover(2, &[0, 1], &[]);

        assert_eq!(minimum_uncovered(&costs, &lines), None);
        assert!(matches!(
            adjust(&mut costs, &lines),
            Err(AssignmentError::InvariantViolation { .. })
        ));
    }

    // Tests an uncovered zero is detected as a broken cover
    // Verified by removing the zero-minimum check
    #[test]
    fn test_adjust_rejects_uncovered_zero() {
        let mut costs = matrix(&[&[0, 0, 2], &[0, 3, 4], &[5, 0, 6]]);
        let lines = cover(3, &[0], &[0]);

        assert!(matches!(
            adjust(&mut costs, &lines),
            Err(AssignmentError::InvariantViolation { .. })
        ));
    }

    // Tests growth of doubly covered entries is overflow-checked
    // Verified by using wrapping addition
    #[test]
    fn test_adjust_overflow() {
        let mut costs = CostMatrix::from_rows(vec![vec![125_i8, 0], vec![0, 5]]).expect("valid");
        let lines = cover(2, &[0], &[0]);

        assert!(matches!(
            adjust(&mut costs, &lines),
            Err(AssignmentError::Overflow { .. })
        ));
    }
}
