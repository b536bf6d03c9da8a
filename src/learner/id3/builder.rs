use crate::Dataset;
use crate::constants::DEFAULT_LOG_BASE;
use super::id3_algorithm::Id3;


/// A struct that builds `Id3`.
/// `Id3Builder` keeps parameters for constructing `Id3`.
/// 
/// # Example
/// 
/// ```no_run
/// use minitrees::prelude::*;
/// 
/// # let dataset = Dataset::new();
/// let learner = Id3Builder::new(&dataset)
///     .log_base(2.0)
///     .consolidate(false)
///     .build();
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    dataset: &'a Dataset,
    log_base: f64,
    consolidate: bool,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// log_base: DEFAULT_LOG_BASE == 2.0,
    /// consolidate: false,
    /// ```
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            log_base: DEFAULT_LOG_BASE,
            consolidate: false,
        }
    }


    /// Set the base of the logarithm in the entropy.
    /// Default value is `2.0`.
    pub fn log_base(mut self, base: f64) -> Self {
        assert!(
            base.is_finite() && base > 0f64 && base != 1f64,
            "The logarithm base must be positive, finite, and not 1"
        );
        self.log_base = base;
        self
    }


    /// Collapse the decision nodes whose children
    /// are leaves of one label after the tree is grown.
    /// Default value is `false`.
    pub fn consolidate(mut self, flag: bool) -> Self {
        self.consolidate = flag;
        self
    }


    /// Build an `Id3`.
    /// This method consumes `self`.
    pub fn build(self) -> Id3<'a> {
        Id3::from_components(self.dataset, self.log_base, self.consolidate)
    }
}
