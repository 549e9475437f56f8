//! Synthetic data with a hidden confounder
//! and two exogenous anchor variables.
use nalgebra::DMatrix;
use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::AnchorSample;


/// Number of covariates generated by [`simulate`].
pub const N_FEATURES: usize = 10;
/// Number of anchor variables generated by [`simulate`].
pub const N_ANCHORS: usize = 2;


/// A simulated data set.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Covariates of shape `n × 10`.
    pub x: DMatrix<f64>,
    /// Response of length `n`.
    pub y: Vec<f64>,
    /// Anchors of shape `n × 2`.
    pub anchor: DMatrix<f64>,
}


impl Simulation {
    /// Returns the pair of the response and the anchors.
    pub fn sample(&self) -> AnchorSample {
        AnchorSample::new(self.y.clone(), self.anchor.clone())
    }


    /// Returns the number of examples.
    #[inline(always)]
    pub fn n_examples(&self) -> usize {
        self.y.len()
    }
}


/// The non-linear response
/// `x2 + x3 + 1{x2 ≤ 0} + 1{x2 ≤ -0.5} 1{x3 ≤ 1}`.
pub fn piecewise_response(x2: f64, x3: f64) -> f64 {
    let indicator = |cond: bool| if cond { 1f64 } else { 0f64 };
    x2 + x3
        + indicator(x2 <= 0f64)
        + indicator(x2 <= -0.5) * indicator(x3 <= 1f64)
}


/// Simulate `n_examples` examples from the structural model
///
/// ```txt
/// a ~ N(0, I_2),  h ~ N(0, 1),
/// x_j = 0.5 ε_j + a_0 + a_1 + 2 h,   j = 0, ..., 9,
/// y   = response(x_1, x_2) - 2 a_0 + 3 h + 0.25 ε,
/// ```
///
/// where all `ε` are independent standard normal noises.
/// The hidden variable `h` confounds `x` and `y`,
/// so shifts in the anchors move the test distribution.
/// Output is deterministic given `seed`.
///
/// # Example
/// ```
/// use anchorboosts::prelude::*;
///
/// let data = simulate(piecewise_response, 50, 1234);
/// assert_eq!(data.x.shape(), (50, 10));
/// assert_eq!(data.anchor.shape(), (50, 2));
///
/// let sample = data.sample();
/// assert_eq!(sample.n_examples(), 50);
/// ```
pub fn simulate<F>(response: F, n_examples: usize, seed: u64) -> Simulation
    where F: Fn(f64, f64) -> f64,
{
    assert!(n_examples > 0, "the number of examples must be positive.");
    let mut rng = StdRng::seed_from_u64(seed);

    let anchor = DMatrix::<f64>::from_fn(n_examples, N_ANCHORS, |_, _| {
        rng.sample(StandardNormal)
    });
    let hidden = (0..n_examples)
        .map(|_| rng.sample(StandardNormal))
        .collect::<Vec<f64>>();

    let x = DMatrix::<f64>::from_fn(n_examples, N_FEATURES, |i, _| {
        let noise: f64 = rng.sample(StandardNormal);
        0.5 * noise + anchor[(i, 0)] + anchor[(i, 1)] + 2f64 * hidden[i]
    });

    let y = (0..n_examples)
        .map(|i| {
            let noise: f64 = rng.sample(StandardNormal);
            response(x[(i, 1)], x[(i, 2)])
                - 2f64 * anchor[(i, 0)]
                + 3f64 * hidden[i]
                + 0.25 * noise
        })
        .collect::<Vec<_>>();

    Simulation { x, y, anchor }
}
