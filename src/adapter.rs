//! Provides [`BoostingAdapter`],
//! the glue between an [`AnchorObjective`] and a boosting engine.
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::{
    AnchorSample,
    AnchorObjective,

    common::checker,
};


/// The evaluation result reported to a boosting engine.
/// Engines use it for logging and early stopping only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// The label `"{objective name} ({γ})"`.
    pub name: String,
    /// The mean loss over the examples.
    pub value: f64,
    /// Always `false` since the value is a loss.
    pub higher_is_better: bool,
}


impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}


impl From<Score> for (String, f64, bool) {
    fn from(score: Score) -> Self {
        (score.name, score.value, score.higher_is_better)
    }
}


/// Struct `BoostingAdapter` wraps an [`AnchorObjective`] and
/// provides the two callbacks a boosting engine calls in each round:
///
/// - [`BoostingAdapter::objective`] returns the pair `(grad, hess)`.
/// - [`BoostingAdapter::score`] returns the mean loss.
///
/// Every call checks that the score vector and the anchor
/// match the number of labels, and panics otherwise.
///
/// # Example
/// ```
/// use anchorboosts::prelude::*;
///
/// let sample = AnchorSample::from_rows(
///     vec![0.3, -1.0, 2.0, 0.5],
///     &[[1.0], [0.0], [-1.0], [2.0]],
/// );
/// let adapter = BoostingAdapter::new(AnchorRegression::new(5.0));
///
/// let f = adapter.init_score(&sample);
/// let (grad, hess) = adapter.objective(&f, &sample);
/// assert_eq!(grad.len(), 4);
/// assert_eq!(hess, vec![1.0; 4]);
///
/// let score = adapter.score(&f, &sample);
/// assert_eq!(score.name, "anchor regression (5)");
/// assert!(!score.higher_is_better);
/// ```
#[derive(Debug, Clone)]
pub struct BoostingAdapter<O> {
    objective: O,
}


impl<O> BoostingAdapter<O>
    where O: AnchorObjective,
{
    /// Whether a higher score is better.
    pub const HIGHER_IS_BETTER: bool = false;


    /// Wrap the given objective.
    pub fn new(objective: O) -> Self {
        Self { objective }
    }


    /// Returns the wrapped objective.
    #[inline(always)]
    pub fn inner(&self) -> &O {
        &self.objective
    }


    /// Returns the label `"{objective name} ({γ})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.objective.name(), self.objective.gamma())
    }


    /// Returns the initial score for the labels of `sample`.
    pub fn init_score(&self, sample: &AnchorSample) -> Vec<f64> {
        checker::anchor_rows(sample.anchor().nrows(), sample.n_examples());
        self.objective.init_score(sample.target())
    }


    /// Returns the pair of the gradient and the diagonal Hessian.
    pub fn objective(&self, f: &[f64], sample: &AnchorSample)
        -> (Vec<f64>, Vec<f64>)
    {
        self.check_shape(f, sample);

        let grad = self.objective.grad(f, sample);
        let hess = self.objective.hess(f, sample);
        (grad, hess)
    }


    /// Returns the mean loss.
    pub fn score(&self, f: &[f64], sample: &AnchorSample) -> Score {
        self.check_shape(f, sample);

        Score {
            name: self.label(),
            value: self.objective.mean_loss(f, sample),
            higher_is_better: Self::HIGHER_IS_BETTER,
        }
    }


    fn check_shape(&self, f: &[f64], sample: &AnchorSample) {
        let n_examples = sample.n_examples();
        assert!(n_examples > 0, "the sample has no examples.");
        checker::anchor_rows(sample.anchor().nrows(), n_examples);
        checker::score_shape(f.len(), n_examples, self.objective.n_outputs());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AnchorKookMultiClassification,
        AnchorLiuClassification,
    };

    fn sample_case_01() -> AnchorSample {
        AnchorSample::from_rows(
            vec![0.0, 1.0, 2.0, 1.0],
            &[[1.0, 0.0], [0.5, 1.0], [-1.0, 2.0], [0.0, 0.0]],
        )
    }

    #[test]
    fn test_label_embeds_gamma() {
        let adapter = BoostingAdapter::new(AnchorLiuClassification::new(2.5));
        assert_eq!(adapter.label(), "liu anchor classification (2.5)");
    }

    #[test]
    fn test_objective_shapes_multi_class() {
        let sample = sample_case_01();
        let adapter = BoostingAdapter::new(
            AnchorKookMultiClassification::new(3.0, 3)
        );
        let f = adapter.init_score(&sample);
        assert_eq!(f.len(), 12);
        let (grad, hess) = adapter.objective(&f, &sample);
        assert_eq!(grad.len(), 12);
        assert_eq!(hess.len(), 12);

        let (name, value, higher_is_better) = adapter.score(&f, &sample)
            .into();
        assert_eq!(name, "kook anchor multi-classification (3)");
        assert!(value.is_finite());
        assert!(!higher_is_better);
    }

    #[test]
    #[should_panic]
    fn test_objective_shape_failure_01() {
        let sample = sample_case_01();
        let adapter = BoostingAdapter::new(
            AnchorKookMultiClassification::new(3.0, 3)
        );
        adapter.objective(&[0.0; 4], &sample);
    }

    #[test]
    #[should_panic]
    fn test_score_shape_failure_01() {
        let sample = sample_case_01();
        let adapter = BoostingAdapter::new(AnchorLiuClassification::new(2.0));
        adapter.score(&[0.0; 5], &sample);
    }
}
