use crate::{Error, Result};
use crate::constants::DEFAULT_DELIMITER;
use super::entry::Entry;
use super::dataset_struct::Dataset;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a delimited text file to [`Dataset`].
/// The last column of every row is the class label.
/// # Example
/// The following code reads a tab-separated file with a header row.
/// ```no_run
/// use minitrees::DatasetReader;
/// let dataset = DatasetReader::new()
///     .file("/path/to/train.txt")
///     .delimiter('\t')
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    delimiter: char,
    has_header: bool,
}


impl<P> DatasetReader<P> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: DEFAULT_DELIMITER,
            has_header: true,
        }
    }


    /// Set the field delimiter.
    /// Default is `'\t'`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Without a header, the attributes are named `Attr. [1]`, `Attr. [2]`, ...
    /// Default is `true`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Reads the rows of `reader` into a [`Dataset`].
    /// Blank lines are skipped.
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Dataset> {
        let mut lines = reader.lines().enumerate();
        let mut names: Option<Arc<[String]>> = None;

        if self.has_header {
            let (_, header) = lines.next().ok_or(Error::MissingHeader)?;
            let header = header?;
            let mut columns = self.split(&header);
            // The last column names the class.
            columns.pop();
            names = Some(columns.into());
        }


        let mut dataset = Dataset::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = self.split(&line);
            let schema = names.get_or_insert_with(|| {
                (1..row.len())
                    .map(|k| format!("Attr. [{k}]"))
                    .collect::<Vec<_>>()
                    .into()
            });

            let expected = schema.len() + 1;
            if row.len() != expected {
                return Err(Error::MalformedRow {
                    line: i + 1, expected, got: row.len(),
                });
            }

            let entry = Entry::from_row(schema.clone(), row)
                .ok_or(Error::MalformedRow { line: i + 1, expected, got: 0 })?;
            dataset.add_entry(entry);
        }

        Ok(dataset)
    }


    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter)
            .map(|field| field.trim().to_string())
            .collect()
    }
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Dataset>`.
    /// This method consumes `self`.
    /// 
    /// # Panics
    /// Panics if the file name is not set.
    pub fn read(self) -> Result<Dataset> {
        let file = self.file.as_ref()
            .expect("The file name is not set. Use `DatasetReader::file`.");
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }
}
