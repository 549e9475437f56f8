use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::utils;
use super::LossFamily;


/// Squared loss for regression.
///
/// ```txt
/// loss = (y - f)^2 / 2
/// grad = f - y
/// hess = 1
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression;


impl Regression {
    /// Construct a new instance of `Regression`.
    pub fn new() -> Self {
        Self
    }
}


impl LossFamily for Regression {
    fn name(&self) -> &str {
        "regression"
    }


    fn init_score(&self, target: &[f64]) -> Vec<f64> {
        vec![utils::mean(target); target.len()]
    }


    fn predictions(&self, f: &[f64]) -> Vec<f64> {
        f.to_vec()
    }


    fn loss(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());

        f.par_iter()
            .zip(target)
            .map(|(fi, y)| 0.5 * (y - fi).powi(2))
            .collect()
    }


    fn grad(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());

        f.par_iter()
            .zip(target)
            .map(|(fi, y)| fi - y)
            .collect()
    }


    fn hess(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        vec![1f64; f.len()]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_family() {
        let family = Regression::new();
        let f = [1.0, -2.0, 0.5];
        let y = [0.0, 1.0, 0.5];
        assert_eq!(family.loss(&f, &y), vec![0.5, 4.5, 0.0]);
        assert_eq!(family.grad(&f, &y), vec![1.0, -3.0, 0.0]);
        assert_eq!(family.hess(&f, &y), vec![1.0; 3]);
        assert_eq!(family.predictions(&f), f.to_vec());
        assert_eq!(family.init_score(&y), vec![0.5; 3]);
    }
}
