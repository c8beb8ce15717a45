use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Absolute tolerance for every equality-to-zero test in the solver.
/// Pivot checks and back-substitution must agree on a single value for
/// results to be deterministic.
pub(crate) const ZERO_TOLERANCE: f64 = 1e-10;

/// Errors reported by [gauss_solve].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("matrix is not square ({rows} rows, {cols} columns)")]
    NotSquare { rows: usize, cols: usize },
    #[error("constant vector has {got} rows, expected {expected}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("matrix is singular")]
    Singular,
    #[error("the system has no unique solution")]
    NoUniqueSolution,
}

pub(crate) fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Solves `matrix * x = constants` by Gaussian elimination with partial
/// pivoting followed by back-substitution.
///
/// Both arguments are borrowed only for the duration of the call; the
/// elimination works on a cloned augmented matrix and never mutates its
/// inputs. The returned vector has one entry per original unknown, in
/// column order.
///
/// # Example
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use quadratic_spline::gauss_solve;
///
/// let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
/// let constants = DVector::from_column_slice(&[5.0, 7.0]);
/// let solution = gauss_solve(&matrix, &constants).unwrap();
///
/// assert_eq!(5.0, solution[0]);
/// assert_eq!(7.0, solution[1]);
/// ```
///
/// # Errors
/// [SolveError::NotSquare] and [SolveError::ShapeMismatch] on malformed
/// input, [SolveError::Singular] when a pivot column has no usable entry,
/// [SolveError::NoUniqueSolution] when back-substitution meets an
/// inconsistent row.
pub fn gauss_solve(
    matrix: &DMatrix<f64>,
    constants: &DVector<f64>,
) -> Result<DVector<f64>, SolveError> {
    let size = matrix.nrows();
    if matrix.ncols() != size {
        return Err(SolveError::NotSquare {
            rows: size,
            cols: matrix.ncols(),
        });
    }
    if constants.len() != size {
        return Err(SolveError::ShapeMismatch {
            expected: size,
            got: constants.len(),
        });
    }

    let mut augmented = DMatrix::<f64>::zeros(size, size + 1);
    augmented.view_mut((0, 0), (size, size)).copy_from(matrix);
    for row in 0..size {
        augmented[(row, size)] = constants[row];
    }

    // Reduce to upper-triangular form.
    for col in 0..size.saturating_sub(1) {
        for row in col + 1..size {
            if augmented[(col, col)].abs() < augmented[(row, col)].abs() {
                augmented.swap_rows(col, row);
            }
        }

        for row in col + 1..size {
            if is_zero(augmented[(row, col)]) {
                continue;
            }
            if is_zero(augmented[(col, col)]) {
                return Err(SolveError::Singular);
            }

            let scaling_factor = augmented[(row, col)] / augmented[(col, col)];
            for k in col..=size {
                augmented[(row, k)] -= augmented[(col, k)] * scaling_factor;
            }
        }
    }

    let mut result = DVector::<f64>::zeros(size);
    for i in (0..size).rev() {
        let mut value = augmented[(i, size)];
        for j in i + 1..size {
            value -= result[j] * augmented[(i, j)];
        }

        if is_zero(value) {
            // An exactly-zero right-hand side resolves to 0 by convention.
            result[i] = 0.0;
        } else if is_zero(augmented[(i, i)]) {
            return Err(SolveError::NoUniqueSolution);
        } else {
            result[i] = value / augmented[(i, i)];
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn identity_returns_constants() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let constants = DVector::from_column_slice(&[5.0, 7.0]);

        let solution = gauss_solve(&matrix, &constants).unwrap();

        assert_eq!(5.0, solution[0]);
        assert_eq!(7.0, solution[1]);
    }

    #[test]
    fn three_by_three_system() {
        let eps = 1e-9;
        let matrix = DMatrix::from_row_slice(3, 3, &[
            2.0, 4.0, 1.0,
            3.0, 2.0, 1.0,
            0.0, 1.0, 2.0,
        ]);
        let constants = DVector::from_column_slice(&[1.0, 2.0, 4.0]);

        let solution = gauss_solve(&matrix, &constants).unwrap();
        let residual = &matrix * &solution - &constants;

        for i in 0..3 {
            assert_approx_eq!(0.0, residual[i], eps);
        }
    }

    #[test]
    fn pivoting_handles_zero_leading_entry() {
        let matrix = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let constants = DVector::from_column_slice(&[3.0, 4.0]);

        let solution = gauss_solve(&matrix, &constants).unwrap();

        assert_eq!(4.0, solution[0]);
        assert_eq!(3.0, solution[1]);
    }

    #[test]
    fn single_unknown() {
        let matrix = DMatrix::from_row_slice(1, 1, &[5.0]);
        let constants = DVector::from_column_slice(&[10.0]);

        let solution = gauss_solve(&matrix, &constants).unwrap();

        assert_eq!(2.0, solution[0]);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let matrix = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let constants = DVector::from_column_slice(&[1.0, 2.0]);

        let result = gauss_solve(&matrix, &constants);

        assert_eq!(Err(SolveError::NotSquare { rows: 2, cols: 3 }), result);
    }

    #[test]
    fn constants_length_mismatch_is_rejected() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let constants = DVector::from_column_slice(&[1.0, 2.0, 3.0]);

        let result = gauss_solve(&matrix, &constants);

        assert_eq!(Err(SolveError::ShapeMismatch { expected: 2, got: 3 }), result);
    }

    #[test]
    fn zero_column_has_no_numeric_result() {
        let matrix = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 1.0]);
        let constants = DVector::from_column_slice(&[1.0, 2.0]);

        assert!(gauss_solve(&matrix, &constants).is_err());
    }

    #[test]
    fn inconsistent_system_has_no_unique_solution() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let constants = DVector::from_column_slice(&[9.0, 19.0]);

        let result = gauss_solve(&matrix, &constants);

        assert_eq!(Err(SolveError::NoUniqueSolution), result);
    }

    #[test]
    fn dependent_but_consistent_system_uses_zero_convention() {
        // Second row is twice the first; the free unknown resolves to 0.
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let constants = DVector::from_column_slice(&[9.0, 18.0]);

        let solution = gauss_solve(&matrix, &constants).unwrap();

        assert_eq!(9.0, solution[0]);
        assert_eq!(0.0, solution[1]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let matrix = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let constants = DVector::from_column_slice(&[3.0, 4.0]);
        let matrix_before = matrix.clone();
        let constants_before = constants.clone();

        gauss_solve(&matrix, &constants).unwrap();

        assert_eq!(matrix_before, matrix);
        assert_eq!(constants_before, constants);
    }
}
