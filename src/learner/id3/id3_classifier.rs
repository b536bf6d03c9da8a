//! Defines the ID3 decision tree classifier.
use crate::{Entry, Predictor, Result};


use super::node::*;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*};


/// Decision tree classifier produced by [`Id3`](super::Id3).
/// This struct is just a wrapper of `Node`.
/// 
/// The [`Display`](fmt::Display) form is the canonical text rendering:
/// branches are listed in sorted order of their value,
/// a branch that ends in a leaf reads `attribute=value:label`,
/// and the subtree of any other branch follows on the next lines,
/// indented by one tab per level and marked with `|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Id3Classifier {
    root: Node
}


impl From<Node> for Id3Classifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Predictor for Id3Classifier {
    /// Fails with [`Error::SchemaViolation`](crate::Error::SchemaViolation)
    /// if the entry reaches a decision node through a value
    /// that node never saw during training.
    fn predict(&self, entry: &Entry) -> Result<String> {
        self.root.predict(entry)
            .map(str::to_string)
    }
}


impl Id3Classifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Collapses every decision node whose children are leaves
    /// of one label into a single leaf.
    pub fn consolidate(self) -> Self {
        Self { root: self.root.consolidate() }
    }


    /// Returns the number of decision nodes on the longest path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the canonical text rendering of the tree.
    pub fn render(&self) -> String {
        self.to_string()
    }


    /// Writes the canonical text rendering to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }


    /// Writes the canonical text rendering to the file at `path`.
    pub fn to_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for Id3Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Node::Decision(node) => node.render(0, f),
            // A tree without any split renders as its label.
            Node::Leaf(leaf) => writeln!(f, "{}", leaf.label()),
        }
    }
}
