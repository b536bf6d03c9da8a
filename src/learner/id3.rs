/// Defines the ID3 learner.
pub mod id3_algorithm;
/// Defines the classifier produced by `Id3`.
pub mod id3_classifier;
/// Defines the builder of `Id3`.
pub mod builder;

/// Defines the inner representations of `Id3Classifier`.
mod node;
mod criterion;


pub use id3_algorithm::Id3;
pub use id3_classifier::Id3Classifier;
pub use builder::Id3Builder;
pub use node::{Node, DecisionNode, LeafNode};
