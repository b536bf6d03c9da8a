//! Defines the error type shared by every learner in this crate.
use polars::prelude::PolarsError;
use thiserror::Error;

use std::io;


/// Errors that can occur while loading data,
/// building a predictor, or predicting an entry.
#[derive(Debug, Error)]
pub enum Error {
    /// The value of `attribute` was never observed during training
    /// at the decision node that queried it.
    #[error("value `{value}` of attribute `{attribute}` was never observed during training")]
    SchemaViolation {
        /// Attribute tested by the decision node.
        attribute: String,
        /// Value carried by the entry.
        value: String,
    },


    /// The entry does not have an attribute of the given name.
    #[error("entry has no attribute named `{0}`")]
    UnknownAttribute(String),


    /// The neighbor count of k-nearest-neighbor must be odd.
    #[error("the number of neighbors must be odd, got {0}")]
    EvenNeighbors(usize),


    /// A learner that needs training entries was given none.
    #[error("the training dataset has no entries")]
    EmptyDataset,


    /// The learner supports exactly two classes.
    #[error("expected exactly two classes, found {0}")]
    ClassCount(usize),


    /// A row of a delimited file has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, got {got}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields found.
        got: usize,
    },


    /// The input has no header row.
    #[error("the input has no header row")]
    MissingHeader,


    /// A data frame cell is null.
    #[error("missing value in column `{0}`")]
    MissingValue(String),


    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] io::Error),


    /// `polars` rejected a column operation.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}


/// Result type used across this crate.
pub type Result<T> = std::result::Result<T, Error>;
