//! Tests for error messages, sources and context propagation

#[cfg(test)]
mod tests {
    use hungarian::io::error::{
        AssignmentError, ErrorContext, WithContext, computation_error, file_system_error,
        invalid_parameter, invariant_violation,
    };
    use std::error::Error;
    use std::io;

    // Tests validation error messages
    // Verified by swapping row and column in the message
    #[test]
    fn test_validation_messages() {
        assert_eq!(AssignmentError::EmptyMatrix.to_string(), "Cost matrix is empty");
        assert_eq!(
            AssignmentError::NotSquare {
                row: 2,
                expected: 3,
                found: 4
            }
            .to_string(),
            "Cost matrix is not square: row 2 has 4 entries, expected 3"
        );
        assert_eq!(
            AssignmentError::NegativeCost {
                row: 1,
                col: 0,
                value: "-5".to_string()
            }
            .to_string(),
            "Negative cost -5 at row 1, column 0"
        );
        assert_eq!(
            AssignmentError::Parse {
                line: 4,
                reason: "bad".to_string()
            }
            .to_string(),
            "Parse error on line 4: bad"
        );
    }

    // Tests solver error messages
    // Verified by omitting the dimension from the message
    #[test]
    fn test_solver_messages() {
        assert_eq!(
            AssignmentError::IterationLimit {
                limit: 10,
                dimension: 3
            }
            .to_string(),
            "No optimal assignment after 10 iterations on a 3x3 matrix"
        );
        assert_eq!(
            AssignmentError::Overflow {
                operation: "matrix adjustment"
            }
            .to_string(),
            "Arithmetic overflow during matrix adjustment"
        );
        assert_eq!(
            invalid_parameter("seed", &"x", &"not a number").to_string(),
            "Invalid parameter 'seed' = 'x': not a number"
        );
        assert_eq!(
            computation_error("verification", &"mismatch").to_string(),
            "Computation error in verification: mismatch"
        );
    }

    // Tests file system errors expose their io source
    // Verified by returning None from source
    #[test]
    fn test_file_system_source() {
        let error = file_system_error(
            "matrix.txt",
            "read",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            error.to_string(),
            "File system error during read on 'matrix.txt': gone"
        );
        assert!(error.source().is_some());
        assert!(AssignmentError::EmptyMatrix.source().is_none());
    }

    // Tests io errors convert into file system errors
    // Verified by mapping io errors to computation errors
    #[test]
    fn test_from_io_error() {
        let error: AssignmentError = io::Error::other("disk").into();
        assert!(matches!(error, AssignmentError::FileSystem { .. }));
    }

    // Tests the iteration is stamped into invariant violations
    // Verified by ignoring the context iteration
    #[test]
    fn test_with_iteration() {
        let result: Result<(), AssignmentError> = Err(invariant_violation("cover incomplete"));
        let error = result.with_iteration(5).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invariant violated at iteration 5: cover incomplete"
        );
    }

    // Tests the operation is stamped into overflow errors only
    // Verified by applying the operation to every variant
    #[test]
    fn test_with_context_operation() {
        let overflow: Result<(), AssignmentError> = Err(AssignmentError::Overflow {
            operation: "unknown",
        });
        let context = ErrorContext {
            operation: Some("total cost"),
            ..Default::default()
        };
        assert!(matches!(
            overflow.with_context(context.clone()),
            Err(AssignmentError::Overflow {
                operation: "total cost"
            })
        ));

        let empty: Result<(), AssignmentError> = Err(AssignmentError::EmptyMatrix);
        assert!(matches!(
            empty.with_context(context),
            Err(AssignmentError::EmptyMatrix)
        ));
    }

    // Tests successful results pass through unchanged
    // Verified by mapping Ok values
    #[test]
    fn test_context_on_success() {
        let ok: Result<u8, AssignmentError> = Ok(3);
        assert_eq!(ok.with_iteration(9).unwrap(), 3);
    }
}
