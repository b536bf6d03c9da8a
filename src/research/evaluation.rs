use colored::Colorize;
use tracing::warn;

use crate::{Dataset, Error, Predictor};

use std::fmt;


/// The outcome of predicting one test entry.
#[derive(Debug)]
pub enum Outcome {
    /// The prediction equals the label.
    Correct(String),


    /// The prediction differs from the label.
    Wrong {
        /// Predicted label.
        predicted: String,
        /// True label.
        expected: String,
    },


    /// The predictor could not classify the entry.
    Failed(Error),
}


impl Outcome {
    /// Returns the predicted label, if any.
    pub fn prediction(&self) -> Option<&str> {
        match self {
            Self::Correct(label) => Some(label.as_str()),
            Self::Wrong { predicted, .. } => Some(predicted.as_str()),
            Self::Failed(_) => None,
        }
    }


    /// Returns `true` if the prediction is correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_))
    }
}


/// Per-entry outcomes of a predictor over a test dataset.
#[derive(Debug)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
}


/// Predicts every entry of `test` with `predictor`.
/// A failed prediction is recorded as [`Outcome::Failed`]
/// and does not stop the others.
pub fn evaluate<P>(predictor: &P, test: &Dataset) -> Evaluation
    where P: Predictor + Sync
{
    let outcomes = predictor.predict_all(test)
        .into_iter()
        .zip(test.entries())
        .enumerate()
        .map(|(i, (prediction, entry))| match prediction {
            Ok(label) if label == entry.label() => Outcome::Correct(label),
            Ok(label) => Outcome::Wrong {
                predicted: label,
                expected: entry.label().to_string(),
            },
            Err(err) => {
                warn!(entry = i + 1, "prediction failed: {err}");
                Outcome::Failed(err)
            },
        })
        .collect::<Vec<_>>();

    Evaluation { outcomes }
}


impl Evaluation {
    /// Returns the outcomes in the order of the test entries.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes[..]
    }


    /// Returns the number of evaluated entries.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }


    /// Returns `true` if nothing was evaluated.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }


    /// Returns the number of correct predictions.
    pub fn n_correct(&self) -> usize {
        self.outcomes.iter()
            .filter(|outcome| outcome.is_correct())
            .count()
    }


    /// Returns the number of failed predictions.
    pub fn n_failed(&self) -> usize {
        self.outcomes.iter()
            .filter(|outcome| matches!(outcome, Outcome::Failed(_)))
            .count()
    }


    /// Returns the ratio of correct predictions.
    /// Failed predictions count as incorrect.
    /// An empty evaluation has accuracy `0`.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() { return 0f64; }
        self.n_correct() as f64 / self.outcomes.len() as f64
    }
}


impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n_wrong = self.len() - self.n_correct() - self.n_failed();
        write!(
            f,
            "{}    {}    {}    {}",
            format!("[ACC {:>6.2}%]", 100f64 * self.accuracy()).bold().green(),
            format!("[CORRECT {:>6}]", self.n_correct()).bold(),
            format!("[WRONG {:>6}]", n_wrong).bold().yellow(),
            format!("[FAILED {:>6}]", self.n_failed()).bold().red(),
        )
    }
}
