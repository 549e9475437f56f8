//! Provides the multi-class extension of
//! [`AnchorKookClassification`](super::AnchorKookClassification).
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::{
    AnchorSample,
    AnchorObjective,
    MultiClassification,
    LossFamily,

    common::{checker, layout, projection, utils},
};


/// Anchor-regularized multi-class classification.
///
/// The residual is the `n × k` matrix `R = P - onehot(y)`,
/// where `P` holds the softmax probabilities.
///
/// ```txt
/// loss(x_i) = cross_entropy(x_i) + factor (γ - 1) Σ_c (P_A R)[i, c]^2,
/// ```
/// where `factor = (k - 1) / k`.
/// With `k = 2`, the penalty matches the one of
/// [`AnchorKookClassification`](super::AnchorKookClassification).
///
/// If `center_residuals` is set,
/// each column of `R` is mean-centered before the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorKookMultiClassification {
    family: MultiClassification,
    gamma: f64,
    center_residuals: bool,
}


impl AnchorKookMultiClassification {
    /// Construct a new objective with the regularization parameter `gamma`
    /// for `n_classes` classes.
    pub fn new(gamma: f64, n_classes: usize) -> Self {
        checker::gamma(gamma);
        Self {
            family: MultiClassification::new(n_classes),
            gamma,
            center_residuals: false,
        }
    }


    /// Set whether the residuals are mean-centered (per class).
    pub fn center_residuals(mut self, center_residuals: bool) -> Self {
        self.center_residuals = center_residuals;
        self
    }


    /// Returns the base family.
    #[inline(always)]
    pub fn family(&self) -> &MultiClassification {
        &self.family
    }


    /// Returns the `n × k` residual matrix.
    pub fn residual_matrix(&self, f: &[f64], target: &[f64])
        -> DMatrix<f64>
    {
        let mut residuals = self.family.residual_matrix(f, target);
        if self.center_residuals {
            utils::center_columns(&mut residuals);
        }
        residuals
    }


    /// Returns the residuals flattened in column-major order.
    pub fn residuals(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        layout::flatten(&self.residual_matrix(f, target))
    }
}


impl AnchorObjective for AnchorKookMultiClassification {
    fn name(&self) -> &str {
        "kook anchor multi-classification"
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
        let residuals = self.residual_matrix(f, target);
        let proj = projection::project(sample.anchor(), &residuals);

        let coef = self.family.factor() * (self.gamma - 1f64);
        self.family.loss(f, target)
            .into_iter()
            .zip(utils::row_squared_sums(&proj))
            .map(|(l, s)| l + coef * s)
            .collect()
    }


    /// With `G = c(P_A R)`, the gradient is
    /// ```txt
    /// grad[i, l] = R[i, l]
    ///     + 2 factor (γ - 1) P[i, l] (G[i, l] - Σ_j G[i, j] P[i, j]),
    /// ```
    /// flattened in column-major order.
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        let residuals = self.residual_matrix(f, target);
        let mut proj = projection::project(sample.anchor(), &residuals);

        if self.center_residuals {
            utils::center_columns(&mut proj);
        }

        let predictions = self.family.probabilities(f);
        proj.row_iter_mut()
            .zip(predictions.row_iter())
            .for_each(|(mut g, p)| {
                let weighted = g.dot(&p);
                g.add_scalar_mut(-weighted);
            });

        let coef = 2f64 * self.family.factor() * (self.gamma - 1f64);
        let anchor_grad = predictions.component_mul(&proj) * coef;

        self.family.grad(f, target)
            .into_iter()
            .zip(anchor_grad.iter())
            .map(|(g, a)| g + a)
            .collect()
    }


    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        self.family.hess(f, sample.target())
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Gamma", format!("{}", self.gamma)),
            ("# of classes", format!("{}", self.family.n_classes())),
            ("Center residuals", format!("{}", self.center_residuals)),
        ]);
        Some(info)
    }
}
