//! This file provides some common functions
//! such as the numerically stable sigmoid.
use nalgebra::DMatrix;
use rayon::prelude::*;


/// Below this margin, `exp(-t) * ln(1 + exp(t))` is replaced by
/// its expansion `1 - exp(t) / 2`.
const DECAY_CUTOFF: f64 = -30.0;


/// Computes `1 / (1 + exp(-x))` without overflow.
#[inline(always)]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}


/// Computes `ln(1 + exp(x))` without overflow.
#[inline(always)]
pub fn softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}


/// Computes `exp(-t) * ln(1 + exp(t))`.
/// The value tends to `1` as `t → -∞` and to `0` as `t → +∞`.
#[inline(always)]
pub fn decay_weight(t: f64) -> f64 {
    if t < DECAY_CUTOFF {
        1.0 - 0.5 * t.exp()
    } else {
        (-t).exp() * softplus(t)
    }
}


/// Returns the arithmetic mean of the given slice.
#[inline(always)]
pub fn mean(items: &[f64]) -> f64 {
    assert!(!items.is_empty(), "cannot take the mean of an empty slice");
    items.iter().sum::<f64>() / items.len() as f64
}


/// Subtracts the mean from each item.
#[inline(always)]
pub fn center(items: &mut [f64]) {
    let mean = mean(items);
    items.par_iter_mut()
        .for_each(|item| { *item -= mean; });
}


/// Subtracts the column mean from each column of `matrix`.
#[inline(always)]
pub fn center_columns(matrix: &mut DMatrix<f64>) {
    matrix.column_iter_mut()
        .for_each(|mut column| {
            let mean = column.mean();
            column.iter_mut()
                .for_each(|item| { *item -= mean; });
        });
}


/// Returns the sum of the squared entries of each row.
#[inline(always)]
pub fn row_squared_sums(matrix: &DMatrix<f64>) -> Vec<f64> {
    matrix.row_iter()
        .map(|row| row.iter().map(|v| v * v).sum::<f64>())
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_is_stable() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(1_000.0) == 1.0);
        assert!(sigmoid(-1_000.0) == 0.0);
        let x = 0.3;
        assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_softplus_is_stable() {
        assert!((softplus(0.0) - 2f64.ln()).abs() < 1e-15);
        assert_eq!(softplus(1_000.0), 1_000.0);
        assert_eq!(softplus(-1_000.0), 0.0);
        let x = 1.7;
        assert!((softplus(x) - (1.0 + x.exp()).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_decay_weight_is_continuous() {
        let below = decay_weight(DECAY_CUTOFF - 1e-9);
        let above = decay_weight(DECAY_CUTOFF + 1e-9);
        assert!((below - above).abs() < 1e-12);
        assert!((decay_weight(0.0) - 2f64.ln()).abs() < 1e-15);
        assert!(decay_weight(800.0).is_finite());
    }

    #[test]
    fn test_center_columns() {
        let mut m = DMatrix::from_column_slice(3, 2, &[
            1.0, 2.0, 3.0,
            -1.0, 0.0, 4.0,
        ]);
        center_columns(&mut m);
        assert_eq!(m.column(0).iter().copied().collect::<Vec<_>>(), [-1.0, 0.0, 1.0]);
        assert_eq!(m.column(1).iter().copied().collect::<Vec<_>>(), [-2.0, -1.0, 3.0]);
    }
}
