/// Defines Naive Bayes learner.
mod nbayes;
/// Defines Naive Bayes Classifiers returned by `NaiveBayes`.
mod nbayes_classifier;


pub use nbayes::NaiveBayes;
pub use nbayes_classifier::NBayesClassifier;
