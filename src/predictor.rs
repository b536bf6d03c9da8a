//! The core library for the `Predictor` trait.
//! 
//! Every learner in this crate produces a `Predictor`:
//! the ID3 tree, k-nearest-neighbor, and naive Bayes.
use rayon::prelude::*;

use crate::{Dataset, Entry, Result};


/// A trait that defines the behavior of a classifier
/// over categorical entries.
/// You only need to implement `predict` method.
pub trait Predictor {
    /// Predicts the class label of `entry`.
    fn predict(&self, entry: &Entry) -> Result<String>;


    /// Predicts the class labels of every entry of `dataset`.
    /// Each prediction succeeds or fails on its own;
    /// a failure does not stop the others.
    fn predict_all(&self, dataset: &Dataset) -> Vec<Result<String>>
        where Self: Sized + Sync
    {
        dataset.entries()
            .par_iter()
            .map(|entry| self.predict(entry))
            .collect::<Vec<_>>()
    }
}


impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, entry: &Entry) -> Result<String> {
        (**self).predict(entry)
    }
}


impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, entry: &Entry) -> Result<String> {
        (**self).predict(entry)
    }
}
