/// Defines the k-nearest-neighbor learner and its builder.
mod knn_algorithm;
/// Defines the classifier produced by `Knn`.
mod knn_classifier;


pub use knn_algorithm::{Knn, KnnBuilder};
pub use knn_classifier::KnnClassifier;
