#![warn(missing_docs)]

//! 
//! A crate that trains and evaluates classifiers
//! over categorical (discrete-valued) data.
//! 
//! The core is the ID3 decision tree:
//! the tree is grown by recursively splitting the training
//! [`Dataset`] on the attribute of maximal information gain.
//! 
//! - `Id3`
//!     Grows an [`Id3Classifier`], a tree of decision nodes and leaves.
//!     The tree predicts an entry by following the branches of its values,
//!     and renders to a canonical text form.
//! 
//! - `Knn` and `NaiveBayes`
//!     Simple learners that share the [`Predictor`] capability.
//! 
//! Every learner is configured over a training dataset
//! and returns its predictor by [`Learner::produce`].
//! 
//! # Example
//! ```no_run
//! use minitrees::prelude::*;
//! use minitrees::research::evaluate;
//! 
//! let train = DatasetReader::new()
//!     .file("/path/to/train.txt")
//!     .read()
//!     .unwrap();
//! let test = DatasetReader::new()
//!     .file("/path/to/test.txt")
//!     .read()
//!     .unwrap();
//! 
//! let tree = Id3Builder::new(&train)
//!     .build()
//!     .produce()
//!     .unwrap();
//! print!("{tree}");
//! 
//! let evaluation = evaluate(&tree, &test);
//! println!("{evaluation}");
//! ```

pub mod constants;
pub mod error;
pub mod dataset;
pub mod predictor;
pub mod learner;
pub mod research;
pub mod prelude;


pub use error::{Error, Result};

pub use dataset::{
    Entry,
    Dataset,
    DatasetReader,
};

pub use predictor::Predictor;

pub use learner::{
    Learner,

    // ID3 decision tree
    Id3,
    Id3Builder,
    Id3Classifier,
    Node,
    DecisionNode,
    LeafNode,

    // K-nearest-neighbor
    Knn,
    KnnBuilder,
    KnnClassifier,

    // Naive Bayes
    NaiveBayes,
    NBayesClassifier,
};
