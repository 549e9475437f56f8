//! Provides the anchor classification objective by Kook et al., 2022.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    AnchorSample,
    AnchorObjective,
    BinaryClassification,
    LossFamily,

    common::{checker, projection, utils},
};


/// Anchor-regularized binary classification with
/// the probability residual `r = p - y`:
///
/// ```txt
/// loss(f) = ln(1 + exp((1 - 2y) f)) + (γ - 1) (P_A r)^2,
/// ```
/// where `p = sigmoid(f)` and `P_A` projects onto the anchor column space.
///
/// If `center_residuals` is set,
/// the residual is mean-centered before the projection.
///
/// # Example
/// ```
/// use anchorboosts::prelude::*;
///
/// let sample = AnchorSample::from_rows(
///     vec![0.0, 0.0, 1.0, 1.0],
///     &[[1.0], [1.0], [-1.0], [-1.0]],
/// );
/// let objective = AnchorKookClassification::new(2.0)
///     .center_residuals(false);
///
/// let f = vec![0.0; 4];
/// let grad = objective.grad(&f, &sample);
/// assert!((grad[0] - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorKookClassification {
    family: BinaryClassification,
    gamma: f64,
    center_residuals: bool,
}


impl AnchorKookClassification {
    /// Construct a new objective with the regularization parameter `gamma`.
    pub fn new(gamma: f64) -> Self {
        checker::gamma(gamma);
        Self {
            family: BinaryClassification::new(),
            gamma,
            center_residuals: false,
        }
    }


    /// Set whether the residuals are mean-centered.
    pub fn center_residuals(mut self, center_residuals: bool) -> Self {
        self.center_residuals = center_residuals;
        self
    }


    /// Returns the base family.
    #[inline(always)]
    pub fn family(&self) -> &BinaryClassification {
        &self.family
    }


    /// Returns the residual `p - y`,
    /// mean-centered if `center_residuals` is set.
    pub fn residuals(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        checker::binary_labels(target);
        let mut residuals = self.family.predictions(f)
            .into_par_iter()
            .zip(target)
            .map(|(p, y)| p - y)
            .collect::<Vec<_>>();

        if self.center_residuals {
            utils::center(&mut residuals);
        }
        residuals
    }
}


impl AnchorObjective for AnchorKookClassification {
    fn name(&self) -> &str {
        "kook anchor classification"
    }


    fn gamma(&self) -> f64 {
        self.gamma
    }


    fn n_outputs(&self) -> usize {
        self.family.n_outputs()
    }


    fn init_score(&self, target: &[f64]) -> Vec<f64> {
        self.family.init_score(target)
    }


    fn loss(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        let residuals = self.residuals(f, target);
        let proj = projection::project_vector(sample.anchor(), &residuals);

        self.family.loss(f, target)
            .into_iter()
            .zip(proj)
            .map(|(l, pr)| l + (self.gamma - 1f64) * pr.powi(2))
            .collect()
    }


    /// ```txt
    /// grad = p - y + 2 (γ - 1) c(P_A r) p (1 - p),
    /// ```
    /// where `c` centers its argument if `center_residuals` is set.
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        let predictions = self.family.predictions(f);
        let residuals = self.residuals(f, target);
        let mut proj = projection::project_vector(
            sample.anchor(), &residuals
        );

        if self.center_residuals {
            utils::center(&mut proj);
        }

        let coef = 2f64 * (self.gamma - 1f64);
        self.family.grad(f, target)
            .into_par_iter()
            .zip(proj)
            .zip(predictions)
            .map(|((g, pr), p)| g + coef * pr * p * (1f64 - p))
            .collect()
    }


    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        self.family.hess(f, sample.target())
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Gamma", format!("{}", self.gamma)),
            ("Center residuals", format!("{}", self.center_residuals)),
        ]);
        Some(info)
    }
}
