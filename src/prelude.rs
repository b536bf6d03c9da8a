//! Exports the standard learners and traits.
//! 
pub use crate::learner::{
    // Learner trait
    Learner,


    // ID3 decision tree
    Id3,
    Id3Builder,
    Id3Classifier,


    // K-nearest-neighbor
    Knn,
    KnnBuilder,
    KnnClassifier,


    // Naive Bayes
    NaiveBayes,
    NBayesClassifier,
};


pub use crate::predictor::Predictor;


pub use crate::dataset::{
    Entry,
    Dataset,
    DatasetReader,
};


pub use crate::error::{
    Error,
    Result,
};
