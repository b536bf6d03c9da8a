use tracing::{debug, info};


use crate::{Dataset, Error, Learner, Result};
use super::{
    node::*,
    criterion,
    id3_classifier::Id3Classifier,
};


use std::fmt;


/// The ID3 algorithm.  
/// Given a set of categorical training entries,
/// [`Id3`] grows a decision tree by recursively splitting
/// on the attribute of maximal information gain,
/// and outputs it as an [`Id3Classifier`].
///
/// The code follows the algorithm described in
/// J. R. Quinlan, Induction of Decision Trees, Machine Learning 1, 1986.
///
/// [`Id3`] is constructed by [`Id3Builder`](super::Id3Builder).
/// 
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
/// 
/// let train = DatasetReader::new()
///     .file("/path/to/train.txt")
///     .read()
///     .unwrap();
/// 
/// let id3 = Id3Builder::new(&train).build();
/// let tree = id3.produce().unwrap();
/// 
/// // Print the tree in its canonical text form.
/// print!("{tree}");
/// ```
pub struct Id3<'a> {
    dataset: &'a Dataset,
    log_base: f64,
    consolidate: bool,
}


impl<'a> Id3<'a> {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn from_components(
        dataset: &'a Dataset,
        log_base: f64,
        consolidate: bool,
    ) -> Self
    {
        Self { dataset, log_base, consolidate, }
    }


    /// Grow a tree over `data` using the attributes in `attributes`.
    /// 
    /// - An empty `data` yields a leaf of `default`.
    /// - A `data` with a single class yields a leaf of that class.
    /// - With no attribute left, the leaf is the majority class of `data`.
    /// 
    /// Otherwise the attribute of maximal gain is selected
    /// (the first one in `attributes` on ties), and
    /// one branch is grown for each value of that attribute
    /// observed in the training dataset of this learner,
    /// so a value missing from `data` still gets a branch.
    /// Each branch recurses on the matching subset
    /// without the selected attribute,
    /// and with the majority class of `data` as its default.
    pub fn build(&self, data: &Dataset, attributes: &[String], default: &str)
        -> Node
    {
        if data.is_empty() {
            return Node::leaf(default);
        }


        if let [label] = data.present_classes()[..] {
            return Node::leaf(label);
        }


        // `data` is non-empty, so the majority class exists.
        let Some(majority) = data.majority_class() else {
            return Node::leaf(default);
        };
        if attributes.is_empty() {
            return Node::leaf(majority);
        }


        let Some((best, gain)) = criterion::best_attribute(
            data, attributes, self.log_base
        ) else {
            return Node::leaf(majority);
        };
        debug!(attribute = best, gain, n_entry = data.len(), "split");


        let remaining = attributes.iter()
            .filter(|attribute| *attribute != best)
            .cloned()
            .collect::<Vec<_>>();


        let mut node = DecisionNode::new(best);
        for value in self.dataset.distinct_values(best) {
            let subset = data.filter_by(best, value);
            let child = self.build(&subset, &remaining, majority);
            node.add_child(value.as_str(), child);
        }

        Node::Decision(node)
    }


    /// Returns the entropy of the class labels of `data`.
    pub fn entropy(&self, data: &Dataset) -> f64 {
        criterion::decision_entropy(data, self.log_base)
    }


    /// Returns the information gain of splitting `data` on `attribute`.
    pub fn gain(&self, data: &Dataset, attribute: &str) -> f64 {
        let h = criterion::decision_entropy(data, self.log_base);
        criterion::information_gain(data, attribute, h, self.log_base)
    }
}


impl Learner for Id3<'_> {
    type Predictor = Id3Classifier;


    fn name(&self) -> &str {
        "ID3"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of attributes", format!("{}", self.dataset.attribute_names().len())),
            ("Log base", format!("{}", self.log_base)),
            ("Consolidation", format!("{}", self.consolidate)),
        ]);
        Some(info)
    }


    /// Grows the tree on the whole training dataset,
    /// with every attribute and the majority class as the default.
    fn produce(&self) -> Result<Self::Predictor> {
        let default = self.dataset.majority_class()
            .ok_or(Error::EmptyDataset)?;
        let attributes = self.dataset.attribute_names();

        let mut root = self.build(self.dataset, attributes, default);
        if self.consolidate {
            root = root.consolidate();
        }

        let tree = Id3Classifier::from(root);
        info!(
            n_entry = self.dataset.len(),
            depth = tree.depth(),
            n_leaves = tree.n_leaves(),
            "grew ID3 tree"
        );
        Ok(tree)
    }
}


impl fmt::Display for Id3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Log base: {}\n\
            - Consolidation: {}\n\
            - Attributes:\
            ",
            self.log_base,
            self.consolidate,
        )?;


        let names = self.dataset.attribute_names();
        let width = names.iter()
            .map(|name| name.len())
            .max()
            .unwrap_or(0);
        for name in names {
            let n_values = self.dataset.distinct_values(name).len();
            writeln!(
                f,
                "\t* [{name: <width$} | {n_values} values]"
            )?;
        }

        write!(f, "----------")
    }
}
