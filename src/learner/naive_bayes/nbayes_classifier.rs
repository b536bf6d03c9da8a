use serde::{
    Serialize,
    Deserialize,
};

use crate::{Entry, Predictor, Result};

use std::collections::HashMap;


/// Map from attribute to the number of occurrences of each value.
pub(super) type ValueCounts = HashMap<String, HashMap<String, usize>>;


/// The statistics of one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ClassModel {
    label: String,
    prior: f64,
    counts: ValueCounts,
    n_entry: usize,
}


impl ClassModel {
    pub(super) fn new(
        label: &str,
        prior: f64,
        counts: ValueCounts,
        n_entry: usize,
    ) -> Self
    {
        Self { label: label.to_string(), prior, counts, n_entry }
    }


    /// Returns the smoothed probability of `attribute = value`
    /// given this class.
    fn likelihood(&self, attribute: &str, value: &str, n_values: usize)
        -> f64
    {
        let count = self.counts.get(attribute)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0);

        (count + 1) as f64 / (self.n_entry + n_values) as f64
    }


    /// Returns `P(c) * prod P(x_i | c)`.
    fn score(&self, entry: &Entry, n_values: &HashMap<String, usize>)
        -> f64
    {
        entry.names()
            .iter()
            .zip(entry.values())
            .fold(self.prior, |p, (name, value)| {
                let n = n_values.get(name).copied().unwrap_or(0);
                p * self.likelihood(name, value, n)
            })
    }
}


/// Naive Bayes classifier over two classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NBayesClassifier {
    pub(super) negative: ClassModel,
    pub(super) positive: ClassModel,
    pub(super) n_values: HashMap<String, usize>,
}


impl NBayesClassifier {
    /// Returns the pair `(negative, positive)` of class labels.
    pub fn classes(&self) -> (&str, &str) {
        (&self.negative.label, &self.positive.label)
    }


    /// Returns the unnormalized posterior of each class
    /// as `(negative, positive)`.
    pub fn scores(&self, entry: &Entry) -> (f64, f64) {
        let n = self.negative.score(entry, &self.n_values);
        let p = self.positive.score(entry, &self.n_values);
        (n, p)
    }
}


impl Predictor for NBayesClassifier {
    /// Predicts the positive class only if its score is strictly larger.
    fn predict(&self, entry: &Entry) -> Result<String> {
        let (n, p) = self.scores(entry);
        let label = if p > n {
            &self.positive.label
        } else {
            &self.negative.label
        };
        Ok(label.clone())
    }
}
