//! Provides the orthogonal projection onto the column space of an anchor.
//!
//! For an anchor matrix `A` of shape `n × m` and a residual `r`,
//! the projection `P_A r` is the vector of fitted values
//! of the least-squares regression of `r` on `A`:
//! ```txt
//! P_A r = A (AᵀA)⁺ Aᵀ r.
//! ```
//! No intercept is added and no centering is performed.
//! Callers center the residual beforehand if they need to.
use nalgebra::{DMatrix, SVD};


/// Struct `Projector` holds an orthonormal basis of
/// the column space of an anchor matrix.
///
/// The basis is the set of left singular vectors of the anchor
/// whose singular values exceed
/// `max(σ) * max(n, m) * f64::EPSILON`.
/// Thus, a rank-deficient anchor yields the fitted values of
/// the minimum-norm least-squares solution.
#[derive(Debug, Clone)]
pub struct Projector {
    basis: DMatrix<f64>,
}


impl Projector {
    /// Construct the projector onto the column space of `anchor`.
    pub fn new(anchor: &DMatrix<f64>) -> Self {
        let (n_examples, n_anchors) = anchor.shape();

        if n_examples == 0 || n_anchors == 0 {
            let basis = DMatrix::<f64>::zeros(n_examples, 0);
            return Self { basis };
        }

        let svd = SVD::new(anchor.clone(), true, false);
        let max_sv = svd.singular_values.max();
        let tolerance = max_sv
            * n_examples.max(n_anchors) as f64
            * f64::EPSILON;

        let rank = svd.singular_values.iter()
            .enumerate()
            .filter_map(|(j, &s)| if s > tolerance { Some(j) } else { None })
            .collect::<Vec<_>>();

        let Some(u) = svd.u else {
            unreachable!("left singular vectors are always requested")
        };
        let basis = u.select_columns(rank.iter());

        Self { basis }
    }


    /// Returns the number of examples (rows) this projector expects.
    #[inline(always)]
    pub fn n_examples(&self) -> usize {
        self.basis.nrows()
    }


    /// Returns the rank of the anchor.
    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.basis.ncols()
    }


    /// Project each column of `residual` onto the anchor column space.
    /// The output has the same shape as `residual`.
    pub fn project(&self, residual: &DMatrix<f64>) -> DMatrix<f64> {
        let (n_examples, n_columns) = residual.shape();
        assert_eq!(
            n_examples, self.n_examples(),
            "the residual has {n_examples} rows, \
            but the anchor has {} rows",
            self.n_examples(),
        );

        if self.rank() == 0 {
            return DMatrix::zeros(n_examples, n_columns);
        }

        let coefficients = self.basis.tr_mul(residual);
        &self.basis * coefficients
    }


    /// Project a residual vector onto the anchor column space.
    pub fn project_vector(&self, residual: &[f64]) -> Vec<f64> {
        let residual = DMatrix::from_column_slice(
            residual.len(), 1, residual
        );
        self.project(&residual)
            .as_slice()
            .to_vec()
    }
}


/// Project each column of `residual` onto the column space of `anchor`.
/// This is a shorthand for `Projector::new(anchor).project(residual)`.
#[inline(always)]
pub fn project(anchor: &DMatrix<f64>, residual: &DMatrix<f64>)
    -> DMatrix<f64>
{
    Projector::new(anchor).project(residual)
}


/// Project the residual vector onto the column space of `anchor`.
#[inline(always)]
pub fn project_vector(anchor: &DMatrix<f64>, residual: &[f64]) -> Vec<f64> {
    Projector::new(anchor).project_vector(residual)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn anchor_case_01() -> DMatrix<f64> {
        DMatrix::from_row_slice(5, 2, &[
            1.0,  0.5,
            1.0, -1.0,
            1.0,  2.0,
            1.0,  0.0,
            1.0, -3.0,
        ])
    }

    #[test]
    fn test_column_space_is_kept() {
        let anchor = anchor_case_01();
        // r = 2 * a0 - a1
        let r = [1.5, 3.0, 0.0, 2.0, 5.0];
        let p = project_vector(&anchor, &r);
        for (i, (ri, pi)) in r.iter().zip(&p).enumerate() {
            assert!(
                (ri - pi).abs() < TOLERANCE,
                "failed for {i}th example. expected {ri}, got {pi}."
            );
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let anchor = anchor_case_01();
        let r = DMatrix::from_column_slice(5, 2, &[
            0.3, -1.2, 4.0, 0.0, 2.5,
            1.0,  1.0, 1.0, 7.0, -2.0,
        ]);
        let projector = Projector::new(&anchor);
        let once = projector.project(&r);
        let twice = projector.project(&once);
        assert_eq!(once.shape(), r.shape());
        assert!((once - twice).abs().max() < TOLERANCE);
    }

    #[test]
    fn test_residual_is_orthogonal_to_anchor() {
        let anchor = anchor_case_01();
        let r = [0.3, -1.2, 4.0, 0.0, 2.5];
        let p = project_vector(&anchor, &r);
        let orthogonal = r.iter()
            .zip(&p)
            .map(|(ri, pi)| ri - pi)
            .collect::<Vec<_>>();
        for j in 0..anchor.ncols() {
            let dot = anchor.column(j)
                .iter()
                .zip(&orthogonal)
                .map(|(a, e)| a * e)
                .sum::<f64>();
            assert!(dot.abs() < TOLERANCE, "column {j}: dot = {dot}");
        }
    }

    #[test]
    fn test_rank_deficient_anchor() {
        // The second column duplicates the first one.
        let anchor = DMatrix::from_row_slice(4, 2, &[
            1.0,  1.0,
            2.0,  2.0,
           -1.0, -1.0,
            0.5,  0.5,
        ]);
        let single = DMatrix::from_row_slice(4, 1, &[1.0, 2.0, -1.0, 0.5]);
        let r = [1.0, -1.0, 3.0, 0.25];

        assert_eq!(Projector::new(&anchor).rank(), 1);
        let p = project_vector(&anchor, &r);
        let q = project_vector(&single, &r);
        for (pi, qi) in p.iter().zip(&q) {
            assert!((pi - qi).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_zero_anchor_projects_to_zero() {
        let anchor = DMatrix::zeros(3, 2);
        let p = project_vector(&anchor, &[1.0, 2.0, 3.0]);
        assert_eq!(p, vec![0.0; 3]);

        let anchor = DMatrix::zeros(3, 0);
        let p = project_vector(&anchor, &[1.0, 2.0, 3.0]);
        assert_eq!(p, vec![0.0; 3]);
    }

    #[test]
    #[should_panic]
    fn test_row_mismatch_failure_01() {
        let anchor = anchor_case_01();
        project_vector(&anchor, &[1.0, 2.0]);
    }
}
