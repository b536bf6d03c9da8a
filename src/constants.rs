//! Default parameters.

/// Default base of the logarithm used by the entropy.
pub const DEFAULT_LOG_BASE: f64 = 2.0;

/// Default number of neighbors for `Knn`.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Default number of folds for `CrossValidation`.
pub const DEFAULT_N_FOLDS: usize = 5;

/// Default seed for shuffling in `CrossValidation`.
pub const DEFAULT_SEED: u64 = 1234;

/// Default field delimiter of `DatasetReader`.
pub const DEFAULT_DELIMITER: char = '\t';

/// Marker written for a prediction that failed.
pub const FAILED_PREDICTION: &str = "?";
