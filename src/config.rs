//! Provides [`ObjectiveConfig`],
//! a serializable description of an anchor objective.
use serde::{Deserialize, Serialize};

use crate::{
    AnchorObjective,
    AnchorKookClassification,
    AnchorKookMultiClassification,
    AnchorLiuClassification,
    AnchorRegression,
    AnchorHsicRegression,

    common::fourier::DEFAULT_N_COMPONENTS,
};


/// Enum `ObjectiveConfig` describes one of the anchor objectives.
/// The variant is selected by the field `"objective"`.
///
/// # Example
/// ```
/// use anchorboosts::prelude::*;
///
/// let config = ObjectiveConfig::from_json(r#"{
///     "objective": "hsic_regression",
///     "gamma": 4.0,
///     "n_components": 50
/// }"#).unwrap();
///
/// let objective = config.build();
/// assert_eq!(objective.name(), "HSIC anchor regression");
/// assert_eq!(objective.gamma(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "objective", rename_all = "snake_case")]
pub enum ObjectiveConfig {
    /// [`AnchorKookClassification`].
    KookClassification {
        /// Regularization parameter.
        gamma: f64,
        /// Whether the residuals are mean-centered.
        #[serde(default)]
        center_residuals: bool,
    },

    /// [`AnchorKookMultiClassification`].
    KookMultiClassification {
        /// Regularization parameter.
        gamma: f64,
        /// Number of classes.
        n_classes: usize,
        /// Whether the residuals are mean-centered.
        #[serde(default)]
        center_residuals: bool,
    },

    /// [`AnchorLiuClassification`].
    LiuClassification {
        /// Regularization parameter.
        gamma: f64,
    },

    /// [`AnchorRegression`].
    AnchorRegression {
        /// Regularization parameter.
        gamma: f64,
    },

    /// [`AnchorHsicRegression`].
    HsicRegression {
        /// Regularization parameter.
        gamma: f64,
        /// Number of random Fourier features.
        #[serde(default = "default_n_components")]
        n_components: usize,
        /// Seed of the random Fourier features.
        #[serde(default)]
        seed: u64,
    },
}


fn default_n_components() -> usize {
    DEFAULT_N_COMPONENTS
}


impl ObjectiveConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }


    /// Serialize the configuration into a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }


    /// Returns the regularization parameter.
    pub fn gamma(&self) -> f64 {
        match self {
            Self::KookClassification { gamma, .. }
            | Self::KookMultiClassification { gamma, .. }
            | Self::LiuClassification { gamma }
            | Self::AnchorRegression { gamma }
            | Self::HsicRegression { gamma, .. } => *gamma,
        }
    }


    /// Build the objective described by `self`.
    pub fn build(&self) -> Box<dyn AnchorObjective + Send + Sync> {
        match *self {
            Self::KookClassification { gamma, center_residuals } => {
                let objective = AnchorKookClassification::new(gamma)
                    .center_residuals(center_residuals);
                Box::new(objective)
            },
            Self::KookMultiClassification {
                gamma, n_classes, center_residuals,
            } => {
                let objective = AnchorKookMultiClassification::new(
                        gamma, n_classes
                    )
                    .center_residuals(center_residuals);
                Box::new(objective)
            },
            Self::LiuClassification { gamma } => {
                Box::new(AnchorLiuClassification::new(gamma))
            },
            Self::AnchorRegression { gamma } => {
                Box::new(AnchorRegression::new(gamma))
            },
            Self::HsicRegression { gamma, n_components, seed } => {
                let objective = AnchorHsicRegression::new(gamma)
                    .n_components(n_components)
                    .seed(seed);
                Box::new(objective)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_filled() {
        let config = ObjectiveConfig::from_json(
            r#"{"objective": "hsic_regression", "gamma": 2.0}"#
        ).unwrap();
        assert_eq!(
            config,
            ObjectiveConfig::HsicRegression {
                gamma: 2.0, n_components: DEFAULT_N_COMPONENTS, seed: 0,
            }
        );

        let config = ObjectiveConfig::from_json(
            r#"{"objective": "kook_classification", "gamma": 3.0}"#
        ).unwrap();
        assert_eq!(
            config,
            ObjectiveConfig::KookClassification {
                gamma: 3.0, center_residuals: false,
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = ObjectiveConfig::KookMultiClassification {
            gamma: 7.0, n_classes: 4, center_residuals: true,
        };
        let json = config.to_json().unwrap();
        assert_eq!(ObjectiveConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_build_names() {
        let cases = [
            (r#"{"objective": "kook_classification", "gamma": 2.0}"#,
             "kook anchor classification", 1),
            (r#"{"objective": "kook_multi_classification", "gamma": 2.0, "n_classes": 3}"#,
             "kook anchor multi-classification", 3),
            (r#"{"objective": "liu_classification", "gamma": 2.0}"#,
             "liu anchor classification", 1),
            (r#"{"objective": "anchor_regression", "gamma": 2.0}"#,
             "anchor regression", 1),
            (r#"{"objective": "hsic_regression", "gamma": 2.0}"#,
             "HSIC anchor regression", 1),
        ];
        for (json, name, n_outputs) in cases {
            let config = ObjectiveConfig::from_json(json).unwrap();
            let objective = config.build();
            assert_eq!(objective.name(), name);
            assert_eq!(objective.n_outputs(), n_outputs);
            assert_eq!(config.gamma(), 2.0);
        }
    }

    #[test]
    fn test_unknown_objective_is_rejected() {
        let result = ObjectiveConfig::from_json(
            r#"{"objective": "quantile", "gamma": 2.0}"#
        );
        assert!(result.is_err());
    }
}
