//! Exports the standard objectives, loss families, and traits.
pub use crate::objective::{
    // Objective trait
    AnchorObjective,


    // Classification ---------------------------
    AnchorKookClassification,
    AnchorKookMultiClassification,
    AnchorLiuClassification,


    // Regression -------------------------------
    AnchorRegression,
    AnchorHsicRegression,
};


pub use crate::family::{
    // Loss family trait
    LossFamily,


    BinaryClassification,
    MultiClassification,
    Regression,
};


pub use crate::sample::AnchorSample;


pub use crate::adapter::{
    BoostingAdapter,
    Score,
};


pub use crate::common::{
    projection::{
        Projector,
        project,
        project_vector,
    },
    fourier::RandomFourierFeatures,
};


pub use crate::config::ObjectiveConfig;


pub use crate::logger::{
    ScoreLogger,
    LogEntry,
};


pub use crate::simulation::{
    Simulation,
    simulate,
    piecewise_response,
};
