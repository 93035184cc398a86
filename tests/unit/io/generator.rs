//! Tests for seeded random matrix generation

#[cfg(test)]
mod tests {
    use hungarian::AssignmentError;
    use hungarian::io::configuration::MAX_MATRIX_DIMENSION;
    use hungarian::io::generator::random_matrix;

    // Tests the same seed reproduces the same matrix
    // Verified by seeding from entropy
    #[test]
    fn test_reproducible() {
        assert_eq!(random_matrix(8, 100, 42).unwrap(), random_matrix(8, 100, 42).unwrap());
        assert_ne!(random_matrix(8, 100, 42).unwrap(), random_matrix(8, 100, 43).unwrap());
    }

    // Tests values stay within the inclusive range
    // Verified by using an exclusive upper bound
    #[test]
    fn test_value_range() {
        let costs = random_matrix(30, 3, 5).unwrap();
        assert_eq!(costs.dimension(), 30);
        assert!(costs.entries().iter().all(|&value| (0..=3).contains(&value)));
        assert!(costs.entries().iter().any(|&value| value == 3));
    }

    // Tests a zero maximum yields an all-zero matrix
    // Verified by rejecting a zero maximum
    #[test]
    fn test_zero_max_cost() {
        let costs = random_matrix(4, 0, 1).unwrap();
        assert_eq!(costs.zero_count(), 16);
    }

    // Tests invalid arguments are rejected
    // Verified by removing each validation in turn
    #[test]
    fn test_invalid_parameters() {
        for (dimension, max_cost) in [(0, 10), (MAX_MATRIX_DIMENSION + 1, 10), (3, -1)] {
            assert!(matches!(
                random_matrix(dimension, max_cost, 0),
                Err(AssignmentError::InvalidParameter { .. })
            ));
        }
    }
}
