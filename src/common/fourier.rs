//! Provides the random Fourier feature map by Rahimi & Recht, 2007.
//!
//! The map approximates the embedding of a scalar residual
//! into the RKHS of the Gaussian kernel:
//! ```txt
//! φ(r) = sqrt(2 / C) * [ cos(w_1 r + b_1), ..., cos(w_C r + b_C) ],
//! ```
//! where `w_c ~ N(0, 1)` and `b_c ~ U[0, 2π)`.
use nalgebra::DMatrix;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{StandardNormal, Uniform};
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

use crate::common::checker;


/// The default number of random features.
pub const DEFAULT_N_COMPONENTS: usize = 100;


/// Struct `RandomFourierFeatures` draws its weights and offsets
/// from a generator seeded by `seed` on **every** call.
/// Thus, two calls with the same residuals return
/// bit-identical features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFourierFeatures {
    n_components: usize,
    seed: u64,
}


impl Default for RandomFourierFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_N_COMPONENTS)
    }
}


impl RandomFourierFeatures {
    /// Construct a new feature map with `n_components` features.
    /// The seed defaults to `0`.
    pub fn new(n_components: usize) -> Self {
        checker::n_components(n_components);
        Self { n_components, seed: 0 }
    }


    /// Set the seed of the random generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the number of features.
    pub fn n_components(mut self, n_components: usize) -> Self {
        checker::n_components(n_components);
        self.n_components = n_components;
        self
    }


    /// Returns the number of features.
    #[inline(always)]
    pub fn components(&self) -> usize {
        self.n_components
    }


    /// Returns the seed of the random generator.
    #[inline(always)]
    pub fn random_seed(&self) -> u64 {
        self.seed
    }


    /// Draw the weights `w` and the offsets `b`.
    /// All weights are drawn before the offsets.
    fn weights_and_offsets(&self) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let weights = (0..self.n_components)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect::<Vec<_>>();

        let uniform = Uniform::new(0f64, TAU);
        let offsets = (0..self.n_components)
            .map(|_| rng.sample(&uniform))
            .collect::<Vec<_>>();

        (weights, offsets)
    }


    /// Returns the pair of the features and their derivatives
    /// with respect to the residual.
    /// Both matrices have the shape `n × n_components`.
    ///
    /// ```txt
    /// features[i, c]   =  cos(r_i w_c + b_c) * sqrt(2 / C)
    /// derivative[i, c] = -sin(r_i w_c + b_c) * w_c * sqrt(2 / C)
    /// ```
    pub fn transform(&self, residuals: &[f64])
        -> (DMatrix<f64>, DMatrix<f64>)
    {
        let (weights, offsets) = self.weights_and_offsets();
        let scale = (2f64 / self.n_components as f64).sqrt();
        let n_examples = residuals.len();

        let mut features = DMatrix::<f64>::zeros(n_examples, self.n_components);
        let mut derivative = DMatrix::<f64>::zeros(n_examples, self.n_components);

        for (c, (w, b)) in weights.into_iter().zip(offsets).enumerate() {
            features.column_mut(c)
                .iter_mut()
                .zip(derivative.column_mut(c).iter_mut())
                .zip(residuals)
                .for_each(|((phi, dphi), r)| {
                    let (sin, cos) = (r * w + b).sin_cos();
                    *phi = cos * scale;
                    *dphi = -sin * w * scale;
                });
        }

        (features, derivative)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn residuals_case_01() -> Vec<f64> {
        vec![-1.5, -0.2, 0.0, 0.7, 2.3, 4.0]
    }

    #[test]
    fn test_same_seed_same_features() {
        let rff = RandomFourierFeatures::new(32).seed(11);
        let r = residuals_case_01();
        let (f1, d1) = rff.transform(&r);
        let (f2, d2) = rff.transform(&r);
        assert_eq!(f1, f2);
        assert_eq!(d1, d2);
        assert_eq!(f1.shape(), (r.len(), 32));
    }

    #[test]
    fn test_different_seed_different_features() {
        let r = residuals_case_01();
        let (f1, _) = RandomFourierFeatures::new(16).seed(0).transform(&r);
        let (f2, _) = RandomFourierFeatures::new(16).seed(1).transform(&r);
        assert_ne!(f1, f2);
    }

    #[test]
    fn test_features_are_bounded() {
        let rff = RandomFourierFeatures::new(50);
        let bound = (2f64 / 50f64).sqrt() + 1e-12;
        let (f, _) = rff.transform(&residuals_case_01());
        assert!(f.iter().all(|phi| phi.abs() <= bound));
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let rff = RandomFourierFeatures::new(20).seed(3);
        let r = residuals_case_01();
        let eps = 1e-6;
        let plus = r.iter().map(|ri| ri + eps).collect::<Vec<_>>();
        let minus = r.iter().map(|ri| ri - eps).collect::<Vec<_>>();

        let (_, derivative) = rff.transform(&r);
        let (fp, _) = rff.transform(&plus);
        let (fm, _) = rff.transform(&minus);
        let numeric = (fp - fm) / (2f64 * eps);

        let diff = (numeric - derivative).abs().max();
        assert!(diff < 1e-6, "max difference is {diff}");
    }

    #[test]
    #[should_panic]
    fn test_zero_components_failure_01() {
        RandomFourierFeatures::new(0);
    }
}
