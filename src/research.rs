//! This directory provides some features for experiments
//! - Batch evaluation of a predictor over a test dataset
//! - A table of predictions of several predictors
//! - Cross validation

/// Provides per-entry evaluation of a predictor.
pub mod evaluation;

/// Provides a writer for the predictions of several predictors.
pub mod prediction_table;

/// Provides an iterator over train/test splits.
pub mod cross_validation;


pub use evaluation::{
    evaluate,
    Evaluation,
    Outcome,
};

pub use prediction_table::PredictionTable;

pub use cross_validation::CrossValidation;
