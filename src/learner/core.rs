//! The core library for the learners.
//! 
//! A learner is configured over a training [`Dataset`](crate::Dataset)
//! (usually through a builder) and produces a [`Predictor`].
use crate::{Predictor, Result};


/// A trait that defines the behavior of a learner.
/// You only need to implement `name` and `produce` methods.
pub trait Learner {
    /// Predictor type, output by the `produce` method.
    type Predictor: Predictor;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the information of the learner.
    /// The pairs are `(parameter name, value)`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains on the dataset given at construction
    /// and returns a predictor.
    fn produce(&self) -> Result<Self::Predictor>;
}
