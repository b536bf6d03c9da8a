use polars::prelude::*;

use crate::{Error, Result};
use super::entry::Entry;

use std::collections::HashMap;
use std::sync::Arc;


/// Struct `Dataset` holds labeled entries in insertion order
/// together with three indexes that are updated on every insertion:
/// 
/// - the distinct values of each attribute, in order of first appearance,
/// - the number of occurrences of each value of each attribute,
/// - the number of occurrences of each class label.
/// 
/// A `Dataset` is append-only.
/// Subsets are built by [`Dataset::filter_by`],
/// which replays [`Dataset::add_entry`] into a fresh dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
    distinct_values: HashMap<String, Vec<String>>,
    value_counts: HashMap<String, HashMap<String, usize>>,
    // Kept in order of first appearance;
    // `present_classes` depends on it.
    class_counts: Vec<(String, usize)>,
    n_entry: usize,
}


impl Dataset {
    /// Construct an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }


    /// Appends `entry` and updates the indexes.
    /// The attribute names of `entry` are not checked against
    /// the entries added before.
    pub fn add_entry(&mut self, entry: Entry) {
        for (name, value) in entry.names().iter().zip(entry.values()) {
            let values = self.distinct_values.entry(name.clone())
                .or_default();
            if !values.contains(value) {
                values.push(value.clone());
            }

            *self.value_counts.entry(name.clone())
                .or_default()
                .entry(value.clone())
                .or_insert(0) += 1;
        }

        let label = entry.label();
        match self.class_counts.iter_mut().find(|(c, _)| c == label) {
            Some((_, count)) => { *count += 1; },
            None => { self.class_counts.push((label.to_string(), 1)); },
        }

        self.n_entry += 1;
        self.entries.push(entry);
    }


    /// Returns a new dataset that contains the entries
    /// whose value at `attribute` equals `value`.
    /// The indexes of the new dataset are rebuilt from scratch.
    pub fn filter_by(&self, attribute: &str, value: &str) -> Self {
        self.entries.iter()
            .filter(|entry| entry.has_value(attribute, value))
            .cloned()
            .collect()
    }


    /// Returns the most common class label.
    /// 
    /// If exactly two classes occur and their counts tie,
    /// the lexicographically larger label wins
    /// (e.g., `"yes"` over `"no"`, `"1"` over `"0"`).
    /// Otherwise the label with the strictly largest count is returned.
    /// Ties among three or more classes are unspecified;
    /// the current rule keeps the label seen first.
    /// 
    /// Returns `None` if the dataset is empty.
    pub fn majority_class(&self) -> Option<&str> {
        if let [(a, m), (b, n)] = &self.class_counts[..] {
            if m == n {
                return Some(a.max(b).as_str());
            }
        }

        let mut best: Option<&(String, usize)> = None;
        for pair in self.class_counts.iter() {
            if best.map_or(true, |(_, n)| pair.1 > *n) {
                best = Some(pair);
            }
        }
        best.map(|(label, _)| label.as_str())
    }


    /// Returns the class labels with nonzero count,
    /// in order of first appearance.
    /// With two classes, index `0` is the negative class and
    /// index `1` the positive one.
    pub fn present_classes(&self) -> Vec<&str> {
        self.class_counts.iter()
            .filter(|(_, n)| *n > 0)
            .map(|(label, _)| label.as_str())
            .collect()
    }


    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.n_entry
    }


    /// Returns `true` if the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.n_entry == 0
    }


    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries[..]
    }


    /// Returns the attribute names shared by the entries.
    /// An empty dataset has no attributes.
    pub fn attribute_names(&self) -> &[String] {
        self.entries.first()
            .map(|entry| entry.names())
            .unwrap_or(&[])
    }


    /// Returns the distinct values of `attribute`
    /// in order of first appearance.
    pub fn distinct_values(&self, attribute: &str) -> &[String] {
        self.distinct_values.get(attribute)
            .map(|values| &values[..])
            .unwrap_or(&[])
    }


    /// Returns the number of entries whose `attribute` is `value`.
    pub fn value_count(&self, attribute: &str, value: &str) -> usize {
        self.value_counts.get(attribute)
            .and_then(|counts| counts.get(value))
            .copied()
            .unwrap_or(0)
    }


    /// Returns the number of entries labeled `label`.
    pub fn class_count(&self, label: &str) -> usize {
        self.class_counts.iter()
            .find(|(c, _)| c == label)
            .map_or(0, |(_, n)| *n)
    }


    /// Returns the pairs of class label and count
    /// in order of first appearance.
    pub fn class_counts(&self) -> &[(String, usize)] {
        &self.class_counts[..]
    }


    /// Convert a `polars::DataFrame` into a `Dataset`.
    /// Every column is read as strings.
    /// The column named `target` holds the class labels;
    /// the others become attributes in column order.
    pub fn from_dataframe(data: &DataFrame, target: &str) -> Result<Self> {
        let target_column = data.column(target)?
            .cast(&DataType::Utf8)?;

        let columns = data.get_columns()
            .iter()
            .filter(|series| series.name() != target)
            .map(|series| series.cast(&DataType::Utf8))
            .collect::<PolarsResult<Vec<_>>>()?;

        let names = columns.iter()
            .map(|series| series.name().to_string())
            .collect::<Vec<_>>();
        let names: Arc<[String]> = names.into();


        let mut cells = columns.iter()
            .map(|series| series.utf8().map(|ca| ca.into_iter()))
            .collect::<PolarsResult<Vec<_>>>()?;

        let mut dataset = Self::new();
        for label in target_column.utf8()?.into_iter() {
            let label = label
                .ok_or_else(|| Error::MissingValue(target.to_string()))?;

            let mut values = Vec::with_capacity(names.len());
            for (name, column) in names.iter().zip(cells.iter_mut()) {
                let value = column.next()
                    .flatten()
                    .ok_or_else(|| Error::MissingValue(name.clone()))?;
                values.push(value);
            }

            dataset.add_entry(Entry::new(names.clone(), values, label));
        }

        Ok(dataset)
    }
}


impl FromIterator<Entry> for Dataset {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Entry>
    {
        let mut dataset = Self::new();
        dataset.extend(iter);
        dataset
    }
}


impl Extend<Entry> for Dataset {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = Entry>
    {
        iter.into_iter()
            .for_each(|entry| self.add_entry(entry));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Dataset {
        let names: Arc<[String]> = vec![
            "outlook".to_string(), "wind".to_string()
        ].into();
        let rows = [
            ["sunny", "weak",   "no"],
            ["sunny", "strong", "no"],
            ["rainy", "weak",   "yes"],
            ["cloudy", "weak",  "yes"],
            ["rainy", "strong", "no"],
        ];
        rows.into_iter()
            .filter_map(|row| Entry::from_row(names.clone(), row))
            .collect()
    }

    #[test]
    fn test_indexes_follow_insertion() {
        let data = weather();
        assert_eq!(data.len(), 5);
        assert_eq!(
            data.distinct_values("outlook"),
            &["sunny", "rainy", "cloudy"]
        );
        assert_eq!(data.distinct_values("wind"), &["weak", "strong"]);
        assert_eq!(data.value_count("outlook", "rainy"), 2);
        assert_eq!(data.value_count("wind", "weak"), 3);
        assert_eq!(data.value_count("wind", "calm"), 0);
        assert_eq!(data.class_count("no"), 3);
        assert_eq!(data.class_count("yes"), 2);
        assert_eq!(data.present_classes(), vec!["no", "yes"]);
    }

    #[test]
    fn test_filter_rebuilds_indexes() {
        let data = weather();
        let sub = data.filter_by("wind", "strong");
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.distinct_values("outlook"), &["sunny", "rainy"]);
        assert_eq!(sub.distinct_values("wind"), &["strong"]);
        assert_eq!(sub.present_classes(), vec!["no"]);

        // The source is left untouched.
        assert_eq!(data.len(), 5);
        assert_eq!(data.distinct_values("wind"), &["weak", "strong"]);
    }

    #[test]
    fn test_filter_without_match() {
        let data = weather();
        let sub = data.filter_by("outlook", "snowy");
        assert!(sub.is_empty());
        assert!(sub.attribute_names().is_empty());
        assert_eq!(sub.majority_class(), None);
    }

    #[test]
    fn test_majority_class() {
        let data = weather();
        assert_eq!(data.majority_class(), Some("no"));

        let weak = data.filter_by("wind", "weak");
        // 1 `no` vs. 2 `yes`
        assert_eq!(weak.majority_class(), Some("yes"));
    }

    #[test]
    fn test_majority_class_tie_prefers_larger_label() {
        let names: Arc<[String]> = vec!["x".to_string()].into();
        let data = [("a", "yes"), ("b", "no"), ("c", "no"), ("d", "yes")]
            .into_iter()
            .map(|(x, y)| Entry::new(names.clone(), vec![x], y))
            .collect::<Dataset>();
        assert_eq!(data.majority_class(), Some("yes"));

        let data = [("a", "0"), ("b", "1")]
            .into_iter()
            .map(|(x, y)| Entry::new(names.clone(), vec![x], y))
            .collect::<Dataset>();
        assert_eq!(data.majority_class(), Some("1"));
    }

    #[test]
    fn test_from_dataframe() {
        let outlook = Series::new("outlook", &["sunny", "rainy", "sunny"]);
        let class = Series::new("play", &["no", "yes", "no"]);
        let temp = Series::new("temp", &[1_i64, 2, 1]);
        let df = DataFrame::new(vec![outlook, class, temp]).unwrap();

        let data = Dataset::from_dataframe(&df, "play").unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.attribute_names(), &["outlook", "temp"]);
        assert_eq!(data.distinct_values("temp"), &["1", "2"]);
        assert_eq!(data.entries()[1].label(), "yes");
        assert_eq!(data.present_classes(), vec!["no", "yes"]);
    }

    #[test]
    fn test_from_dataframe_rejects_null_cells() {
        let outlook = Series::new("outlook", &[Some("sunny"), None, Some("rainy")]);
        let class = Series::new("play", &["no", "yes", "no"]);
        let df = DataFrame::new(vec![outlook, class]).unwrap();

        let result = Dataset::from_dataframe(&df, "play");
        assert!(matches!(result, Err(Error::MissingValue(ref name)) if name == "outlook"));

        let outlook = Series::new("outlook", &["sunny", "rainy"]);
        let class = Series::new("play", &[Some("no"), None]);
        let df = DataFrame::new(vec![outlook, class]).unwrap();

        let result = Dataset::from_dataframe(&df, "play");
        assert!(matches!(result, Err(Error::MissingValue(ref name)) if name == "play"));
    }
}
