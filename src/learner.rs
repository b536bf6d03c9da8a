//! The files in `learner/` directory define
//! the `Learner` trait and the learners.

/// Provides the `Learner` trait.
pub mod core;

/// Defines the ID3 decision tree.
pub mod id3;

/// Defines k-nearest-neighbor.
pub mod knn;

/// Defines naive Bayes.
pub mod naive_bayes;


pub use self::core::Learner;

pub use self::id3::{
    Id3,
    Id3Builder,
    Id3Classifier,
    Node,
    DecisionNode,
    LeafNode,
};

pub use self::knn::{
    Knn,
    KnnBuilder,
    KnnClassifier,
};

pub use self::naive_bayes::{
    NaiveBayes,
    NBayesClassifier,
};
