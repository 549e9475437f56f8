//! Provides anchor regression with an HSIC-type penalty.
use serde::{Deserialize, Serialize};

use crate::{
    AnchorSample,
    AnchorObjective,
    Regression,
    LossFamily,
    RandomFourierFeatures,

    common::{checker, projection, utils},
};


/// Anchor regression that penalizes random Fourier features
/// of the residual `r = y - f` instead of the residual itself.
/// With `Φ = φ(r)` of shape `n × C`,
///
/// ```txt
/// loss(x_i) = ( (y_i - f_i)^2 / 2
///             + (γ - 1) Σ_c (P_A Φ)[i, c]^2 ) / max(γ, 1).
/// ```
///
/// Since `φ` approximates the Gaussian-kernel embedding,
/// the penalty also catches non-linear dependence
/// between the residual and the anchor.
/// For `γ = 1`, this objective skips the feature map
/// and returns the base loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorHsicRegression {
    family: Regression,
    gamma: f64,
    features: RandomFourierFeatures,
}


impl AnchorHsicRegression {
    /// Construct a new objective with the regularization parameter `gamma`.
    /// By default, it uses `100` random features with seed `0`.
    pub fn new(gamma: f64) -> Self {
        checker::gamma(gamma);
        Self {
            family: Regression::new(),
            gamma,
            features: RandomFourierFeatures::default(),
        }
    }


    /// Set the number of random Fourier features.
    pub fn n_components(mut self, n_components: usize) -> Self {
        self.features = self.features.n_components(n_components);
        self
    }


    /// Set the seed of the random Fourier features.
    pub fn seed(mut self, seed: u64) -> Self {
        self.features = self.features.seed(seed);
        self
    }


    /// Returns the base family.
    #[inline(always)]
    pub fn family(&self) -> &Regression {
        &self.family
    }


    /// Returns the random Fourier feature map.
    #[inline(always)]
    pub fn features(&self) -> &RandomFourierFeatures {
        &self.features
    }


    /// Returns the residual `y - f`.
    pub fn residuals(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        target.iter()
            .zip(f)
            .map(|(y, fi)| y - fi)
            .collect()
    }
}


impl AnchorObjective for AnchorHsicRegression {
    fn name(&self) -> &str {
        "HSIC anchor regression"
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
        let (fourier, _) = self.features.transform(&residuals);
        let proj = projection::project(sample.anchor(), &fourier);

        let scale = self.gamma.max(1f64);
        self.family.loss(f, target)
            .into_iter()
            .zip(utils::row_squared_sums(&proj))
            .map(|(l, s)| (l + (self.gamma - 1f64) * s) / scale)
            .collect()
    }


    /// With `Φ' = dφ/dr`,
    /// ```txt
    /// grad_i = ( f_i - y_i - 2 (γ - 1) Σ_c (P_A Φ)[i, c] Φ'[i, c] )
    ///          / max(γ, 1).
    /// ```
    fn grad(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        let target = sample.target();
        if self.gamma == 1f64 {
            return self.family.grad(f, target);
        }

        let residuals = self.residuals(f, target);
        let (fourier, derivative) = self.features.transform(&residuals);
        let chain = projection::project(sample.anchor(), &fourier)
            .component_mul(&derivative);

        let coef = 2f64 * (self.gamma - 1f64);
        let scale = self.gamma.max(1f64);
        self.family.grad(f, target)
            .into_iter()
            .zip(chain.row_iter())
            .map(|(g, row)| (g - coef * row.sum()) / scale)
            .collect()
    }


    fn hess(&self, f: &[f64], sample: &AnchorSample) -> Vec<f64> {
        self.family.hess(f, sample.target())
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Gamma", format!("{}", self.gamma)),
            ("# of components", format!("{}", self.features.components())),
            ("Seed", format!("{}", self.features.random_seed())),
        ]);
        Some(info)
    }
}
