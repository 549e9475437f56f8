//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use std::collections::BTreeSet;


/// Check whether the regularization parameter is valid or not.
#[inline(always)]
pub(crate) fn gamma(gamma: f64) {
    assert!(
        gamma.is_finite(),
        "the regularization parameter `gamma` must be finite. got {gamma}."
    );
}


/// Check the number of random Fourier features.
#[inline(always)]
pub(crate) fn n_components(n_components: usize) {
    assert!(
        n_components > 0,
        "the number of random Fourier features must be positive."
    );
}


/// Check the number of classes for multi-class classification.
#[inline(always)]
pub(crate) fn n_classes(n_classes: usize) {
    assert!(
        n_classes >= 2,
        "multi-class classification needs at least 2 classes. \
        got {n_classes}."
    );
}


/// Check whether the labels take values in `{0, 1}`.
#[inline(always)]
pub(crate) fn binary_labels(target: &[f64]) {
    let invalid = target.iter()
        .filter(|&&y| y != 0f64 && y != 1f64)
        .take(5)
        .map(|y| y.to_string())
        .collect::<Vec<_>>();
    assert!(
        invalid.is_empty(),
        "binary labels must be 0 or 1. Ex. [{}, ...].",
        invalid.join(", "),
    );
}


/// Check whether the labels take values in `{0, ..., n_classes - 1}`.
#[inline(always)]
pub(crate) fn class_labels(target: &[f64], n_classes: usize) {
    let invalid = target.iter()
        .filter(|&&y| {
            y.trunc() != y || y < 0f64 || y >= n_classes as f64
        })
        .take(5)
        .map(|y| y.to_string())
        .collect::<Vec<_>>();
    assert!(
        invalid.is_empty(),
        "class labels must be integers in [0, {n_classes}). Ex. [{}, ...].",
        invalid.join(", "),
    );
}


/// Check whether every class in `{0, ..., n_classes - 1}`
/// occurs in `target`.
#[inline(always)]
pub(crate) fn all_classes_present(target: &[f64], n_classes: usize) {
    class_labels(target, n_classes);
    let present = target.iter()
        .map(|&y| y as usize)
        .collect::<BTreeSet<_>>();
    let missing = (0..n_classes)
        .filter(|k| !present.contains(k))
        .map(|k| k.to_string())
        .collect::<Vec<_>>();
    assert!(
        missing.is_empty(),
        "every class must occur in the labels. missing: [{}].",
        missing.join(", "),
    );
}


/// Check whether the score vector matches
/// the number of examples and outputs.
#[inline(always)]
pub(crate) fn score_shape(n_scores: usize, n_examples: usize, n_outputs: usize) {
    assert_eq!(
        n_scores, n_examples * n_outputs,
        "the score vector has length {n_scores}, \
        but {n_examples} examples with {n_outputs} outputs \
        need length {}.",
        n_examples * n_outputs,
    );
}


/// Check whether the anchor matrix has one row per example.
#[inline(always)]
pub(crate) fn anchor_rows(n_rows: usize, n_examples: usize) {
    assert_eq!(
        n_rows, n_examples,
        "the anchor has {n_rows} rows, but there are {n_examples} labels."
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_success_01() {
        gamma(1f64);
        gamma(0.5);
        gamma(100f64);
    }

    #[test]
    #[should_panic]
    fn test_gamma_failure_01() {
        gamma(f64::NAN);
    }

    #[test]
    #[should_panic]
    fn test_gamma_failure_02() {
        gamma(f64::INFINITY);
    }

    #[test]
    fn test_binary_labels_success_01() {
        binary_labels(&[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn test_binary_labels_failure_01() {
        binary_labels(&[0.0, 1.0, -1.0]);
    }

    #[test]
    fn test_all_classes_present_success_01() {
        all_classes_present(&[2.0, 0.0, 1.0, 1.0], 3);
    }

    #[test]
    #[should_panic]
    fn test_all_classes_present_failure_01() {
        all_classes_present(&[0.0, 2.0, 2.0], 3);
    }

    #[test]
    #[should_panic]
    fn test_class_labels_failure_01() {
        class_labels(&[0.0, 1.5], 3);
    }

    #[test]
    #[should_panic]
    fn test_class_labels_failure_02() {
        class_labels(&[0.0, 3.0], 3);
    }

    #[test]
    #[should_panic]
    fn test_score_shape_failure_01() {
        score_shape(5, 3, 2);
    }

    #[test]
    #[should_panic]
    fn test_n_classes_failure_01() {
        n_classes(1);
    }
}
