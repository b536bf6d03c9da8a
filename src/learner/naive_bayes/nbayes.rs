use tracing::info;

use crate::{Dataset, Error, Learner, Result};

use super::nbayes_classifier::*;

use std::collections::HashMap;


/// A factory that produces a [`NBayesClassifier`]
/// for a categorical dataset with two classes.
/// 
/// The likelihood of `attribute = value` given class `c` is smoothed as
/// `(count(attribute = value, c) + 1) / (count(c) + |values of attribute|)`.
pub struct NaiveBayes<'a> {
    dataset: &'a Dataset,
}


impl<'a> NaiveBayes<'a> {
    /// Initializes the NaiveBayes instance.
    pub fn init(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }
}


impl Learner for NaiveBayes<'_> {
    type Predictor = NBayesClassifier;


    fn name(&self) -> &str {
        "Naive Bayes"
    }


    /// Fails with `Error::ClassCount`
    /// unless the dataset has exactly two classes.
    fn produce(&self) -> Result<Self::Predictor> {
        let data = self.dataset;
        let classes = data.present_classes();
        let [negative, positive] = classes[..] else {
            return Err(Error::ClassCount(classes.len()));
        };


        let n_entry = data.len() as f64;
        let prior_n = data.class_count(negative) as f64 / n_entry;
        let prior_p = data.class_count(positive) as f64 / n_entry;


        // Number of entries per attribute and value for each class.
        let mut counts_n: ValueCounts = HashMap::new();
        let mut counts_p: ValueCounts = HashMap::new();
        for entry in data.entries() {
            let counts = if entry.label() == positive {
                &mut counts_p
            } else {
                &mut counts_n
            };
            for (name, value) in entry.names().iter().zip(entry.values()) {
                *counts.entry(name.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_insert(0) += 1;
            }
        }


        let n_values = data.attribute_names()
            .iter()
            .map(|name| (name.clone(), data.distinct_values(name).len()))
            .collect::<HashMap<_, _>>();


        info!(negative, positive, n_entry = data.len(), "trained naive Bayes");
        let negative = ClassModel::new(
            negative, prior_n, counts_n, data.class_count(negative)
        );
        let positive = ClassModel::new(
            positive, prior_p, counts_p, data.class_count(positive)
        );

        Ok(NBayesClassifier { negative, positive, n_values })
    }
}
