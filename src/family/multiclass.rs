use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::common::{checker, layout};
use super::LossFamily;


/// Multi-class negative log-likelihood with the softmax link.
/// Labels take values in `{0, ..., n_classes - 1}`.
///
/// The score vector `f` has length `n * n_classes` and
/// is flattened in column-major order.
/// Each row of the reshaped scores is shifted by its maximum
/// before exponentiation.
///
/// The Hessian is scaled by `1 / factor`, where
/// `factor = (n_classes - 1) / n_classes`.
/// For `n_classes = 2`, this matches the magnitude of
/// [`BinaryClassification`](super::BinaryClassification).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiClassification {
    n_classes: usize,
}


impl MultiClassification {
    /// Construct a new instance of `MultiClassification`
    /// with `n_classes` classes.
    pub fn new(n_classes: usize) -> Self {
        checker::n_classes(n_classes);
        Self { n_classes }
    }


    /// Returns the number of classes.
    #[inline(always)]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Returns `(n_classes - 1) / n_classes`.
    #[inline(always)]
    pub fn factor(&self) -> f64 {
        (self.n_classes - 1) as f64 / self.n_classes as f64
    }


    /// Reshape `f` and shift each row by its maximum.
    fn shifted_scores(&self, f: &[f64]) -> DMatrix<f64> {
        let mut scores = layout::to_matrix(f, self.n_classes);
        scores.row_iter_mut()
            .for_each(|mut row| {
                let max = row.max();
                row.add_scalar_mut(-max);
            });
        scores
    }


    /// Returns the softmax probabilities as an `n × n_classes` matrix.
    /// Each row sums to `1`.
    pub fn probabilities(&self, f: &[f64]) -> DMatrix<f64> {
        let mut probabilities = self.shifted_scores(f);
        probabilities.apply(|v| { *v = v.exp(); });
        probabilities.row_iter_mut()
            .for_each(|mut row| {
                let sum = row.sum();
                row /= sum;
            });
        probabilities
    }


    /// Returns `probabilities - onehot(y)` as an `n × n_classes` matrix.
    pub(crate) fn residual_matrix(&self, f: &[f64], target: &[f64])
        -> DMatrix<f64>
    {
        let mut residuals = self.probabilities(f);
        assert_eq!(residuals.nrows(), target.len());
        checker::class_labels(target, self.n_classes);

        for (i, &y) in target.iter().enumerate() {
            residuals[(i, y as usize)] -= 1f64;
        }
        residuals
    }
}


impl LossFamily for MultiClassification {
    fn name(&self) -> &str {
        "multi-class classification"
    }


    fn n_outputs(&self) -> usize {
        self.n_classes
    }


    /// The `c`-th block of the output is `ln(freq(c))`,
    /// repeated for each example.
    /// This method panics unless every class occurs in `target`.
    fn init_score(&self, target: &[f64]) -> Vec<f64> {
        checker::all_classes_present(target, self.n_classes);

        let n_examples = target.len();
        let mut counts = vec![0usize; self.n_classes];
        target.iter()
            .for_each(|&y| { counts[y as usize] += 1; });

        let scores = DMatrix::from_fn(n_examples, self.n_classes, |_, c| {
            (counts[c] as f64 / n_examples as f64).ln()
        });
        layout::flatten(&scores)
    }


    fn predictions(&self, f: &[f64]) -> Vec<f64> {
        layout::flatten(&self.probabilities(f))
    }


    /// ```txt
    /// loss(x_i) = - f[i, y_i] + ln( sum_c exp(f[i, c]) )
    /// ```
    fn loss(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        let scores = self.shifted_scores(f);
        assert_eq!(scores.nrows(), target.len());
        checker::class_labels(target, self.n_classes);

        scores.row_iter()
            .zip(target)
            .map(|(row, &y)| {
                let log_divisor = row.iter()
                    .map(|v| v.exp())
                    .sum::<f64>()
                    .ln();
                - row[y as usize] + log_divisor
            })
            .collect()
    }


    fn grad(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        layout::flatten(&self.residual_matrix(f, target))
    }


    fn hess(&self, f: &[f64], _target: &[f64]) -> Vec<f64> {
        let factor = self.factor();
        self.predictions(f)
            .into_iter()
            .map(|p| p * (1f64 - p) / factor)
            .collect()
    }
}
