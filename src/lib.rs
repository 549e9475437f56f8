#![warn(missing_docs)]

//!
//! A crate that provides anchor-regularized objectives
//! for gradient boosting.
//!
//! Every objective in this crate returns
//! a per-example loss, its gradient, and a diagonal Hessian
//! with respect to the current score vector `f`.
//! A boosting engine fits the next round from these values.
//!
//! The anchor penalty measures how much of the residual is
//! explained by the anchor variables `A`:
//!
//! ```txt
//! loss(f) = base_loss(f) + (γ - 1) * ‖ P_A r(f) ‖²,
//! ```
//! where `P_A` is the orthogonal projection onto the column space of `A`.
//! Setting `γ = 1` recovers the base loss.
//!
//! This crate includes two kinds of objectives.
//!
//! - Classification
//!     [`AnchorKookClassification`], [`AnchorKookMultiClassification`],
//!     and [`AnchorLiuClassification`] add the penalty to
//!     the (multi-class) cross-entropy loss.
//!
//! - Regression
//!     [`AnchorRegression`] and [`AnchorHsicRegression`]
//!     add the penalty to the squared loss.
//!     The HSIC variant penalizes random Fourier features of the residual,
//!     so that non-linear dependence on the anchor is penalized as well.
//!
//! [`BoostingAdapter`] wraps any of these objectives
//! to provide the `objective` and `score` callbacks
//! that a boosting engine expects.

pub mod common;
pub mod sample;
pub mod family;
pub mod objective;
pub mod adapter;
pub mod config;
pub mod logger;
pub mod simulation;
pub mod prelude;


pub use sample::AnchorSample;

pub use family::{
    LossFamily,
    BinaryClassification,
    MultiClassification,
    Regression,
};

pub use objective::{
    AnchorObjective,
    AnchorKookClassification,
    AnchorKookMultiClassification,
    AnchorLiuClassification,
    AnchorRegression,
    AnchorHsicRegression,
};

pub use adapter::{
    BoostingAdapter,
    Score,
};

pub use config::ObjectiveConfig;
pub use logger::ScoreLogger;

pub use common::projection::{
    Projector,
    project,
    project_vector,
};
pub use common::fourier::RandomFourierFeatures;
