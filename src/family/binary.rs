use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{checker, utils};
use super::LossFamily;


/// Two-class negative log-likelihood with the logistic link.
/// Labels take values in `{0, 1}`.
///
/// ```txt
/// p(f)    = 1 / (1 + exp(-f))
/// loss    = ln(1 + exp((1 - 2y) f))
/// grad    = p - y
/// hess    = p (1 - p)
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryClassification;


impl BinaryClassification {
    /// Construct a new instance of `BinaryClassification`.
    pub fn new() -> Self {
        Self
    }
}


impl LossFamily for BinaryClassification {
    fn name(&self) -> &str {
        "binary classification"
    }


    /// Returns the log-odds of the positive rate for every example.
    /// This method panics if `target` holds only one of the two labels,
    /// since the log-odds is infinite in that case.
    fn init_score(&self, target: &[f64]) -> Vec<f64> {
        checker::binary_labels(target);
        let p = utils::mean(target);
        assert!(
            0f64 < p && p < 1f64,
            "both labels must occur to compute the initial score. \
            positive rate is {p}."
        );

        vec![(p / (1f64 - p)).ln(); target.len()]
    }


    fn predictions(&self, f: &[f64]) -> Vec<f64> {
        f.par_iter()
            .map(|&fi| utils::sigmoid(fi))
            .collect()
    }


    fn loss(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        checker::binary_labels(target);

        f.par_iter()
            .zip(target)
            .map(|(&fi, &y)| utils::softplus((1f64 - 2f64 * y) * fi))
            .collect()
    }


    fn grad(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());
        checker::binary_labels(target);

        f.par_iter()
            .zip(target)
            .map(|(&fi, &y)| utils::sigmoid(fi) - y)
            .collect()
    }


    fn hess(&self, f: &[f64], target: &[f64]) -> Vec<f64> {
        assert_eq!(f.len(), target.len());

        f.par_iter()
            .map(|&fi| {
                let p = utils::sigmoid(fi);
                p * (1f64 - p)
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictions_are_probabilities() {
        let family = BinaryClassification::new();
        let f = [-50.0, -2.0, 0.0, 0.3, 4.0];
        for p in family.predictions(&f) {
            assert!(0.0 < p && p < 1.0, "p = {p}");
            assert!((p + (1.0 - p) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_loss_is_cross_entropy() {
        let family = BinaryClassification::new();
        let f = [-1.2, 0.4, 2.0];
        let y = [1.0, 0.0, 1.0];
        let loss = family.loss(&f, &y);
        for ((fi, yi), l) in f.iter().zip(&y).zip(loss) {
            let p = 1.0 / (1.0 + (-fi).exp());
            let expected = -(yi * p.ln() + (1.0 - yi) * (1.0 - p).ln());
            assert!((l - expected).abs() < 1e-12, "{l} vs {expected}");
        }
    }

    #[test]
    fn test_loss_does_not_overflow() {
        let family = BinaryClassification::new();
        let loss = family.loss(&[1_000.0, -1_000.0], &[0.0, 1.0]);
        assert_eq!(loss, vec![1_000.0, 1_000.0]);
    }

    #[test]
    fn test_init_score_reproduces_positive_rate() {
        let family = BinaryClassification::new();
        let y = [1.0, 0.0, 0.0, 1.0, 1.0];
        let f = family.init_score(&y);
        assert_eq!(f.len(), y.len());
        for p in family.predictions(&f) {
            assert!((p - 0.6).abs() < 1e-12, "p = {p}");
        }
    }

    #[test]
    #[should_panic]
    fn test_init_score_failure_01() {
        BinaryClassification::new().init_score(&[1.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "binary labels must be 0 or 1")]
    fn test_loss_rejects_non_binary_labels() {
        BinaryClassification::new().loss(&[0.0, 0.0], &[0.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "binary labels must be 0 or 1")]
    fn test_grad_rejects_non_binary_labels() {
        BinaryClassification::new().grad(&[0.0, 0.0], &[-1.0, 1.0]);
    }
}
