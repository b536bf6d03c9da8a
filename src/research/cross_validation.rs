use rand::prelude::*;
use colored::Colorize;

use crate::Dataset;
use crate::constants::{DEFAULT_N_FOLDS, DEFAULT_SEED};

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates 
/// pairs of training/test dataset for cross validation.
/// The `i`'th test fold is the `i`'th contiguous block of the
/// (optionally shuffled) entry order.
/// Fold sizes differ by at most one;
/// the first `n_entry % n_folds` folds take one extra entry.
/// The number of folds never exceeds the number of entries.
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use minitrees::research::{evaluate, CrossValidation};
///
/// # fn run(dataset: &Dataset) -> minitrees::Result<()> {
/// let cv = CrossValidation::new(dataset)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let tree = Id3Builder::new(&train).build().produce()?;
///     let evaluation = evaluate(&tree, &test);
///     println!("{evaluation}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    dataset: &'a Dataset,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(dataset: &'a Dataset) -> Self {
        let ix = (0..dataset.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS.min(dataset.len()),
            seed: DEFAULT_SEED,
            verbose: false,
            dataset,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5`,
    /// or the number of entries if the dataset is smaller.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least two folds");
        assert!(
            n_folds <= self.dataset.len(),
            "Cannot split {} entries into {} folds",
            self.dataset.len(), n_folds,
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the entry order.
    /// By default, `CrossValidation` does not shuffle the dataset.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test dataset for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Dataset, Dataset) {
        let n_entry = self.dataset.len();
        let size = n_entry / self.n_folds;
        let rest = n_entry % self.n_folds;
        let start = i * size + i.min(rest);
        let end = start + size + usize::from(i < rest);

        let entries = self.dataset.entries();
        let mut train = Dataset::new();
        let mut test = Dataset::new();
        for (k, &j) in self.ix.iter().enumerate() {
            let entry = entries[j].clone();
            if (start..end).contains(&k) {
                test.add_entry(entry);
            } else {
                train.add_entry(entry);
            }
        }
        (train, test)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Dataset, Dataset);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;
    use std::sync::Arc;

    fn dataset(n: usize) -> Dataset {
        let names: Arc<[String]> = vec!["x".to_string()].into();
        (0..n).map(|i| {
                let label = if i % 2 == 0 { "even" } else { "odd" };
                Entry::new(names.clone(), vec![format!("{i}")], label)
            })
            .collect()
    }

    #[test]
    fn test_folds_partition_entries() {
        let data = dataset(11);
        let folds = CrossValidation::new(&data)
            .n_folds(3)
            .collect::<Vec<_>>();
        assert_eq!(folds.len(), 3);

        let sizes = folds.iter()
            .map(|(train, test)| (train.len(), test.len()))
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![(7, 4), (7, 4), (8, 3)]);

        let n_test = folds.iter().map(|(_, test)| test.len()).sum::<usize>();
        assert_eq!(n_test, data.len());
        assert_eq!(folds[0].1.entries()[0].value_of("x"), Some("0"));
    }

    #[test]
    fn test_small_dataset_has_no_empty_fold() {
        let data = dataset(3);
        let sizes = CrossValidation::new(&data)
            .map(|(train, test)| (train.len(), test.len()))
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![(2, 1), (2, 1), (2, 1)]);
    }

    #[test]
    #[should_panic]
    fn test_more_folds_than_entries() {
        let data = dataset(3);
        let _ = CrossValidation::new(&data).n_folds(4);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let data = dataset(20);
        let first = |seed| {
            CrossValidation::new(&data)
                .seed(seed)
                .shuffle()
                .next()
                .map(|(_, test)| test.entries().to_vec())
                .unwrap()
        };
        assert_eq!(first(7), first(7));
    }
}
