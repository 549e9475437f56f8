//! Provides the anchor-regularized objectives.
//!
//! Each objective owns a base family from [`family`](crate::family)
//! and adds its own penalty on the anchor-explained residual.
//! The Hessian is always the one of the base family.

mod kook;
mod kook_multi;
mod liu;
mod anchor_regression;
mod hsic;


pub use kook::AnchorKookClassification;
pub use kook_multi::AnchorKookMultiClassification;
pub use liu::AnchorLiuClassification;
pub use anchor_regression::AnchorRegression;
pub use hsic::AnchorHsicRegression;


use crate::AnchorSample;


/// The trait [`AnchorObjective`] defines the interface
/// between an anchor-regularized objective and a boosting engine.
///
/// # Required Methods
/// - [`AnchorObjective::name`]
/// - [`AnchorObjective::gamma`]
/// - [`AnchorObjective::n_outputs`]
/// - [`AnchorObjective::init_score`]
/// - [`AnchorObjective::loss`]
/// - [`AnchorObjective::grad`]
/// - [`AnchorObjective::hess`]
///
/// # Provided Methods
/// - [`AnchorObjective::mean_loss`]
/// - [`AnchorObjective::info`]
///
/// `grad` is the exact derivative of the sum of `loss`
/// with respect to `f`.
/// `hess` is the diagonal Hessian of the base loss only.
pub trait AnchorObjective {
    /// Returns the name of the objective.
    fn name(&self) -> &str;


    /// Returns the regularization parameter `γ`.
    fn gamma(&self) -> f64;


    /// The number of scores per example.
    fn n_outputs(&self) -> usize;


    /// Constant initial score used before the first boosting round.
    fn init_score(&self, target: &[f64]) -> Vec<f64>;


    /// Loss value for each example.
    fn loss(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64>;


    /// Gradient of the total loss with respect to `f`.
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64>;


    /// Diagonal Hessian of the base loss.
    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64>;


    /// Mean loss over the examples.
    fn mean_loss(&self, f: &[f64], sample: &AnchorSample) -> f64 {
        let loss = self.loss(f, sample);
        let n_examples = loss.len();
        assert!(n_examples > 0);

        loss.into_iter().sum::<f64>() / n_examples as f64
    }


    /// Returns the parameters of the objective.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }
}


impl<O> AnchorObjective for Box<O>
    where O: AnchorObjective + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }


    fn gamma(&self) -> f64 {
        (**self).gamma()
    }


    fn n_outputs(&self) -> usize {
        (**self).n_outputs()
    }


    fn init_score(&self, target: &[f64]) -> Vec<f64> {
        (**self).init_score(target)
    }


    fn loss(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        (**self).loss(f, sample)
    }


    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        (**self).grad(f, sample)
    }


    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        (**self).hess(f, sample)
    }


    fn mean_loss(&self, f: &[f64], sample: &AnchorSample) -> f64 {
        (**self).mean_loss(f, sample)
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        (**self).info()
    }
}
