//! Defines the inner representation 
//! of the ID3 decision tree.
use crate::{Entry, Error, Result};

use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::HashMap;


/// Enumeration of `DecisionNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests one attribute.
    Decision(DecisionNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the decision nodes of the tree.
/// Each child is keyed by one observed value of `attribute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub(super) attribute: String,
    pub(super) children: HashMap<String, Node>,
}


impl DecisionNode {
    /// Returns a `DecisionNode` without children.
    #[inline]
    pub(super) fn new<S: Into<String>>(attribute: S) -> Self {
        Self { attribute: attribute.into(), children: HashMap::new(), }
    }


    /// Attach `child` under the branch `value`.
    #[inline]
    pub(super) fn add_child<S: Into<String>>(&mut self, value: S, child: Node) {
        self.children.insert(value.into(), child);
    }


    /// Returns the attribute tested by this node.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Returns the child reached by `value`.
    pub fn child(&self, value: &str) -> Option<&Node> {
        self.children.get(value)
    }


    /// Returns the children keyed by attribute value.
    pub fn children(&self) -> &HashMap<String, Node> {
        &self.children
    }


    /// Returns the branches sorted by their value.
    pub(super) fn sorted_children(&self) -> Vec<(&String, &Node)> {
        let mut branches = self.children.iter().collect::<Vec<_>>();
        branches.sort_by(|a, b| a.0.cmp(b.0));
        branches
    }


    /// Follows the branch of `entry` and predicts its label.
    pub fn predict(&self, entry: &Entry) -> Result<&str> {
        let value = entry.value_of(&self.attribute)
            .ok_or_else(|| Error::UnknownAttribute(self.attribute.clone()))?;

        match self.children.get(value) {
            Some(child) => child.predict(entry),
            None => Err(Error::SchemaViolation {
                attribute: self.attribute.clone(),
                value: value.to_string(),
            }),
        }
    }


    /// Returns the label shared by all children
    /// if every child is a leaf with that label.
    fn common_leaf_label(&self) -> Option<&str> {
        let mut common: Option<&str> = None;
        for child in self.children.values() {
            let Node::Leaf(leaf) = child else { return None; };
            match common {
                None => { common = Some(leaf.label.as_str()); },
                Some(label) if label != leaf.label => { return None; },
                Some(_) => {},
            }
        }
        common
    }


    /// Writes the branches of this node, one line per branch.
    /// `level` is the depth of this node.
    pub(super) fn render<W: fmt::Write>(&self, level: usize, f: &mut W)
        -> fmt::Result
    {
        for (value, child) in self.sorted_children() {
            for _ in 0..level {
                f.write_char('\t')?;
            }

            // Only the children carry the continuation marker.
            if level != 0 {
                f.write_char('|')?;
            }

            match child {
                Node::Leaf(leaf) => {
                    writeln!(f, "{}={}:{}", self.attribute, value, leaf.label)?;
                },
                Node::Decision(node) => {
                    writeln!(f, "{}={}", self.attribute, value)?;
                    node.render(level + 1, f)?;
                },
            }
        }
        Ok(())
    }
}


/// Represents the leaf nodes of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
}


impl LeafNode {
    /// Returns the class label of this leaf.
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Returns a leaf that predicts `label`.
    #[inline]
    pub(super) fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf(LeafNode { label: label.into() })
    }


    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Predicts the label of `entry` by walking down from this node.
    pub fn predict(&self, entry: &Entry) -> Result<&str> {
        match self {
            Self::Decision(node) => node.predict(entry),
            Self::Leaf(leaf) => Ok(&leaf.label),
        }
    }


    /// Collapses, bottom-up, every decision node
    /// whose children are leaves of one label into a single leaf.
    pub(super) fn consolidate(self) -> Self {
        let mut node = match self {
            Self::Decision(node) => node,
            leaf => return leaf,
        };

        node.children = node.children.into_iter()
            .map(|(value, child)| (value, child.consolidate()))
            .collect();

        match node.common_leaf_label() {
            Some(label) => Self::leaf(label),
            None => Self::Decision(node),
        }
    }


    /// Returns the number of decision nodes on the longest path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decision(node) => {
                1 + node.children.values()
                    .map(Self::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Decision(node) => {
                node.children.values()
                    .map(Self::n_leaves)
                    .sum()
            },
            Self::Leaf(_) => 1,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Decision(node) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attr}\" ];\n",
                    attr = escape(&node.attribute),
                )];

                let mut next_id = id + 1;
                for (value, child) in node.sorted_children() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{v}\" ];\n",
                        v = escape(value),
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                    label = escape(&leaf.label),
                );

                (vec![info], id + 1)
            },
        }
    }
}


fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        let mut windy = DecisionNode::new("wind");
        windy.add_child("weak", Node::leaf("yes"));
        windy.add_child("strong", Node::leaf("no"));

        let mut root = DecisionNode::new("outlook");
        root.add_child("sunny", Node::leaf("no"));
        root.add_child("rainy", Node::Decision(windy));
        root.add_child("cloudy", Node::leaf("yes"));
        Node::Decision(root)
    }

    #[test]
    fn test_render_sorts_branches() {
        let Node::Decision(root) = tree() else { unreachable!() };
        let mut text = String::new();
        root.render(0, &mut text).unwrap();
        assert_eq!(
            text,
            "outlook=cloudy:yes\n\
             outlook=rainy\n\
             \t|wind=strong:no\n\
             \t|wind=weak:yes\n\
             outlook=sunny:no\n"
        );
    }

    #[test]
    fn test_consolidate_cascades() {
        let mut inner = DecisionNode::new("b");
        inner.add_child("x", Node::leaf("yes"));
        inner.add_child("y", Node::leaf("yes"));

        let mut root = DecisionNode::new("a");
        root.add_child("p", Node::Decision(inner));
        root.add_child("q", Node::leaf("yes"));

        let node = Node::Decision(root).consolidate();
        assert_eq!(node, Node::leaf("yes"));
    }

    #[test]
    fn test_consolidate_keeps_mixed_nodes() {
        let node = tree().consolidate();
        assert_eq!(node, tree());
    }

    #[test]
    fn test_shape() {
        let node = tree();
        assert_eq!(node.depth(), 2);
        assert_eq!(node.n_leaves(), 4);
        assert!(!node.is_leaf());
        assert_eq!(Node::leaf("no").depth(), 0);
    }

    #[test]
    fn test_dot_info_numbers_nodes() {
        let (info, next_id) = tree().to_dot_info(0);
        assert_eq!(next_id, 6);
        assert_eq!(info.iter().filter(|row| row.contains(" -- ")).count(), 5);
    }
}
