//! Provides the anchor classification objective
//! with the smoothed margin residual.
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
/// the smoothed margin residual.
/// With `y' = 2y - 1` and `t = y' f`,
///
/// ```txt
/// r(f)    = -f + y' (1 + exp(-t)) ln(1 + exp(t)),
/// loss(f) = ln(1 + exp(-t)) + (γ - 1) (P_A r)^2.
/// ```
///
/// For `γ = 1`, this objective skips the projection
/// and returns the base loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorLiuClassification {
    family: BinaryClassification,
    gamma: f64,
}


impl AnchorLiuClassification {
    /// Construct a new objective with the regularization parameter `gamma`.
    pub fn new(gamma: f64) -> Self {
        checker::gamma(gamma);
        Self {
            family: BinaryClassification::new(),
            gamma,
        }
    }


    /// Returns the base family.
    #[inline(always)]
    pub fn family(&self) -> &BinaryClassification {
        &self.family
    }


    /// Returns the smoothed margin residual.
    pub fn residuals(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        checker::binary_labels(target);

        f.par_iter()
            .zip(target)
            .map(|(&fi, &y)| {
                let y = 2f64 * y - 1f64;
                let t = y * fi;
                // (1 + exp(-t)) ln(1 + exp(t))
                let smoothed = utils::softplus(t) + utils::decay_weight(t);
                - fi + y * smoothed
            })
            .collect()
    }
}


impl AnchorObjective for AnchorLiuClassification {
    fn name(&self) -> &str {
        "liu anchor classification"
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

        self.family.loss(f, target)
            .into_iter()
            .zip(proj)
            .map(|(l, pr)| l + (self.gamma - 1f64) * pr.powi(2))
            .collect()
    }


    /// Since `dr/df = -exp(-t) ln(1 + exp(t))`,
    /// ```txt
    /// grad = p - y - 2 (γ - 1) (P_A r) exp(-t) ln(1 + exp(t)).
    /// ```
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        if self.gamma == 1f64 {
            return self.family.grad(f, target);
        }

        let residuals = self.residuals(f, target);
        let proj = projection::project_vector(sample.anchor(), &residuals);

        let coef = 2f64 * (self.gamma - 1f64);
        self.family.grad(f, target)
            .into_par_iter()
            .zip(proj)
            .zip(f)
            .zip(target)
            .map(|(((g, pr), &fi), &y)| {
                let t = (2f64 * y - 1f64) * fi;
                g - coef * pr * utils::decay_weight(t)
            })
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
