//! Provides anchor regression by Rothenhäusler et al., 2021.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    AnchorSample,
    AnchorObjective,
    Regression,
    LossFamily,

    common::{checker, projection},
};


/// Anchor regression with the residual `r = y - f`:
///
/// ```txt
/// loss(f) = ( (y - f)^2 / 2 + (γ - 1) (P_A r)^2 ) / max(γ, 1).
/// ```
///
/// The division by `max(γ, 1)` keeps the scale of the loss
/// comparable across `γ ≥ 1`.
/// For `γ = 1`, this objective skips the projection
/// and returns the base loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRegression {
    family: Regression,
    gamma: f64,
}


impl AnchorRegression {
    /// Construct a new objective with the regularization parameter `gamma`.
    pub fn new(gamma: f64) -> Self {
        checker::gamma(gamma);
        Self {
            family: Regression::new(),
            gamma,
        }
    }


    /// Returns the base family.
    #[inline(always)]
    pub fn family(&self) -> &Regression {
        &self.family
    }


    /// Returns the residual `y - f`.
    pub fn residuals(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        target.par_iter()
            .zip(f)
            .map(|(y, fi)| y - fi)
            .collect()
    }
}


impl AnchorObjective for AnchorRegression {
    fn name(&self) -> &str {
        "anchor regression"
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
        if self.gamma == 1f64 {
            return self.family.loss(f, target);
        }

        let residuals = self.residuals(f, target);
        let proj = projection::project_vector(sample.anchor(), &residuals);

        let scale = self.gamma.max(1f64);
        self.family.loss(f, target)
            .into_iter()
            .zip(proj)
            .map(|(l, pr)| (l + (self.gamma - 1f64) * pr.powi(2)) / scale)
            .collect()
    }


    /// ```txt
    /// grad = ( f - y - 2 (γ - 1) P_A r ) / max(γ, 1).
    /// ```
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        if self.gamma == 1f64 {
            return self.family.grad(f, target);
        }

        let residuals = self.residuals(f, target);
        let proj = projection::project_vector(sample.anchor(), &residuals);

        let coef = 2f64 * (self.gamma - 1f64);
        let scale = self.gamma.max(1f64);
        self.family.grad(f, target)
            .into_par_iter()
            .zip(proj)
            .map(|(g, pr)| (g - coef * pr) / scale)
            .collect()
    }


    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        self.family.hess(f, sample.target())
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Gamma", format!("{}", self.gamma)),
        ]);
        Some(info)
    }
}
