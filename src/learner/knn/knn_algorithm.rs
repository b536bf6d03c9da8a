use tracing::info;

use crate::{Dataset, Error, Learner, Result};
use crate::constants::DEFAULT_NEIGHBORS;
use super::knn_classifier::KnnClassifier;


/// A struct that builds `Knn`.
/// 
/// # Example
/// 
/// ```no_run
/// use minitrees::prelude::*;
/// 
/// # let dataset = Dataset::new();
/// let knn = KnnBuilder::new(&dataset)
///     .k(5)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct KnnBuilder<'a> {
    dataset: &'a Dataset,
    k: usize,
}


impl<'a> KnnBuilder<'a> {
    /// Construct a new instance of [`KnnBuilder`].
    /// The number of neighbors defaults to `5`.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset, k: DEFAULT_NEIGHBORS }
    }


    /// Set the number of neighbors.
    /// `k` must be odd; this is checked by `build`.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }


    /// Build a `Knn`.
    /// Fails with `Error::EvenNeighbors` if `k` is even
    /// and with `Error::EmptyDataset` if there is nothing to compare to.
    pub fn build(self) -> Result<Knn<'a>> {
        if self.k % 2 == 0 {
            return Err(Error::EvenNeighbors(self.k));
        }
        if self.dataset.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Ok(Knn { dataset: self.dataset, k: self.k })
    }
}


/// The k-nearest-neighbor learner over categorical entries.
/// The distance between two entries is their Hamming distance.
pub struct Knn<'a> {
    dataset: &'a Dataset,
    k: usize,
}


impl Knn<'_> {
    /// Returns the number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }
}


impl<'a> Learner for Knn<'a> {
    type Predictor = KnnClassifier<'a>;


    fn name(&self) -> &str {
        "KNN"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("# of neighbors", format!("{}", self.k))])
    }


    fn produce(&self) -> Result<Self::Predictor> {
        info!(k = self.k, n_entry = self.dataset.len(), "prepared KNN");
        Ok(KnnClassifier::new(self.dataset.entries(), self.k))
    }
}
