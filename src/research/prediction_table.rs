use crate::{Dataset, Predictor};
use crate::constants::FAILED_PREDICTION;
use super::evaluation::{evaluate, Evaluation};

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;


/// A table of the predictions of several predictors
/// over one test dataset.
/// 
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// use minitrees::research::PredictionTable;
/// 
/// # fn run(train: &Dataset, test: &Dataset) -> minitrees::Result<()> {
/// let tree = Id3Builder::new(train).build().produce()?;
/// let knn = KnnBuilder::new(train).k(5).build()?.produce()?;
/// let nb = NaiveBayes::init(train).produce()?;
/// 
/// let mut table = PredictionTable::new(test);
/// table.push("DT", &tree);
/// table.push("KNN", &knn);
/// table.push("naiveBase", &nb);
/// table.to_file("output.txt")?;
/// # Ok(())
/// # }
/// ```
pub struct PredictionTable<'a> {
    test: &'a Dataset,
    columns: Vec<(String, Evaluation)>,
}


impl<'a> PredictionTable<'a> {
    /// Construct an empty table over `test`.
    pub fn new(test: &'a Dataset) -> Self {
        Self { test, columns: Vec::new() }
    }


    /// Evaluates `predictor` on the test dataset
    /// and appends it as a column named `name`.
    pub fn push<S, P>(&mut self, name: S, predictor: &P) -> &Evaluation
        where S: ToString,
              P: Predictor + Sync,
    {
        let evaluation = evaluate(predictor, self.test);
        self.columns.push((name.to_string(), evaluation));
        &self.columns[self.columns.len() - 1].1
    }


    /// Returns the pairs of column name and evaluation.
    pub fn columns(&self) -> &[(String, Evaluation)] {
        &self.columns[..]
    }


    /// Writes the table to `writer`.
    /// 
    /// The first line is `Num` followed by the column names,
    /// then one line per test entry with its 1-based number
    /// and the prediction of each column (`?` for a failed one),
    /// and the last line lists the accuracies with two decimals.
    /// Fields are separated by tabs.
    /// The last line has no trailing newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "Num")?;
        for (name, _) in self.columns.iter() {
            write!(writer, "\t{name}")?;
        }
        writeln!(writer)?;


        for i in 0..self.test.len() {
            write!(writer, "{}", i + 1)?;
            for (_, evaluation) in self.columns.iter() {
                let prediction = evaluation.outcomes()[i]
                    .prediction()
                    .unwrap_or(FAILED_PREDICTION);
                write!(writer, "\t{prediction}")?;
            }
            writeln!(writer)?;
        }


        for (_, evaluation) in self.columns.iter() {
            write!(writer, "\t{:.2}", evaluation.accuracy())?;
        }
        Ok(())
    }


    /// Writes the table to the file at `path`.
    pub fn to_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}
