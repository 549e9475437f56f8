//! Provides the base likelihoods that anchor objectives build on.

mod binary;
mod multiclass;
mod regression;


pub use binary::BinaryClassification;
pub use multiclass::MultiClassification;
pub use regression::Regression;


/// This trait defines the base loss families.
///
/// A score vector `f` has length `n * n_outputs`,
/// flattened in column-major order
/// (see [`layout`](crate::common::layout)).
/// Every method that returns a per-example quantity
/// returns a vector of length `n`;
/// `grad` and `hess` return vectors of the same length as `f`.
pub trait LossFamily {
    /// The name of the loss family.
    fn name(&self) -> &str;


    /// The number of scores per example.
    fn n_outputs(&self) -> usize {
        1
    }


    /// Constant initial score used before the first boosting round.
    fn init_score(&self, target: &[f64]) -> Vec<f64>;


    /// Predictions for the given scores.
    /// The output has the same length as `f`.
    fn predictions(&self, f: &[f64]) -> Vec<f64>;


    /// Loss value for each example.
    fn loss(&self, f: &[f64], target: &[f64]) -> Vec<f64>;


    /// Mean loss over the examples.
    fn mean_loss(&self, f: &[f64], target: &[f64]) -> f64 {
        let loss = self.loss(f, target);
        let n_examples = loss.len();
        assert!(n_examples > 0);

        loss.into_iter().sum::<f64>() / n_examples as f64
    }


    /// Gradient vector at the current point.
    fn grad(&self, f: &[f64], target: &[f64]) -> Vec<f64>;


    /// Hessian at the current point.
    /// Here, this method assumes that the Hessian is diagonal,
    /// so that it returns a diagonal vector.
    fn hess(&self, f: &[f64], target: &[f64]) -> Vec<f64>;
}
