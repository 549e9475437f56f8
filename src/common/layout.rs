//! A score vector for `k`-class classification has length `n * k`.
//! Conceptually, it is an `n × k` matrix flattened in **column-major** order:
//!
//! ```txt
//! [ f(x1, 0), ..., f(xn, 0), f(x1, 1), ..., f(xn, 1), ..., f(xn, k-1) ]
//! ```
//!
//! Every reshape in this crate goes through the functions below.
//! `nalgebra` stores `DMatrix` in column-major order,
//! so both directions are plain copies.
use nalgebra::DMatrix;


/// Reshape the flat score vector `f` into an `n × n_classes` matrix.
#[inline(always)]
pub fn to_matrix(f: &[f64], n_classes: usize) -> DMatrix<f64> {
    assert!(n_classes > 0, "the number of classes must be positive");
    assert_eq!(
        f.len() % n_classes, 0,
        "a score vector of length {} cannot be reshaped into {} columns",
        f.len(), n_classes,
    );
    let n_examples = f.len() / n_classes;
    DMatrix::from_column_slice(n_examples, n_classes, f)
}


/// Flatten the given matrix in column-major order.
#[inline(always)]
pub fn flatten(matrix: &DMatrix<f64>) -> Vec<f64> {
    matrix.as_slice().to_vec()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_matrix_is_column_major() {
        let f = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
        let m = to_matrix(&f, 2);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(2, 0)], 2.0);
        assert_eq!(m[(0, 1)], 10.0);
        assert_eq!(m[(1, 1)], 11.0);
    }

    #[test]
    fn test_flatten_inverts_to_matrix() {
        let f = (0..12).map(|i| i as f64).collect::<Vec<_>>();
        let m = to_matrix(&f, 3);
        assert_eq!(flatten(&m), f);
    }

    #[test]
    #[should_panic]
    fn test_to_matrix_failure_01() {
        let f = [0.0; 5];
        to_matrix(&f, 2);
    }
}
