use serde::{Serialize, Deserialize};

use std::fmt;
use std::sync::Arc;


/// One labeled observation.
/// An `Entry` holds the values of the attributes named in `names`
/// (in the same order) and a class label.
/// All entries of a dataset share one `names` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    names: Arc<[String]>,
    values: Vec<String>,
    label: String,
}


impl Entry {
    /// Construct a new entry.
    /// `names` and `values` should have the same length;
    /// an attribute past the end of `values` reads as absent.
    pub fn new<V, L>(names: Arc<[String]>, values: Vec<V>, label: L) -> Self
        where V: Into<String>,
              L: Into<String>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();

        Self { names, values, label: label.into() }
    }


    /// Construct an entry from a raw row whose last field is the label.
    /// Returns `None` if the row is empty.
    pub fn from_row<I, S>(names: Arc<[String]>, row: I) -> Option<Self>
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let mut values = row.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let label = values.pop()?;

        Some(Self::new(names, values, label))
    }


    /// Returns the attribute names of this entry.
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the attribute values of this entry.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns the class label.
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the value of `attribute`,
    /// or `None` if this entry has no such attribute.
    #[inline]
    pub fn value_of(&self, attribute: &str) -> Option<&str> {
        self.names.iter()
            .position(|name| name == attribute)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }


    /// Returns `true` if the value of `attribute` equals `value`.
    #[inline]
    pub fn has_value(&self, attribute: &str, value: &str) -> bool {
        self.value_of(attribute) == Some(value)
    }


    /// Counts the positions at which the two entries disagree.
    pub fn hamming(&self, other: &Self) -> usize {
        self.values.iter()
            .zip(&other.values)
            .filter(|(x, y)| x != y)
            .count()
    }
}


/// Two entries are equal when their attribute values are equal.
/// The label is ignored.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}


impl Eq for Entry {}


impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.values.join(", "), self.label)
    }
}
