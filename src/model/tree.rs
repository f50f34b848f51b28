//! The nested heading outline.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One heading in the outline together with its sub-headings.
///
/// Children keep insertion order. A leaf serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingNode {
    children: Vec<(String, HeadingNode)>,
}

impl HeadingNode {
    /// Create a node without children.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.children.iter().position(|(l, _)| l == label)
    }

    /// Insert `label` as an empty child and return it.
    ///
    /// An existing child with the same label keeps its position but loses
    /// all of its own children.
    pub fn insert(&mut self, label: impl Into<String>) -> &mut HeadingNode {
        let label = label.into();
        let idx = match self.position(&label) {
            Some(idx) => {
                self.children[idx].1 = HeadingNode::new();
                idx
            }
            None => {
                self.children.push((label, HeadingNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    /// Return the child named `label`, appending an empty one if absent.
    pub fn get_or_insert(&mut self, label: &str) -> &mut HeadingNode {
        let idx = match self.position(label) {
            Some(idx) => idx,
            None => {
                self.children.push((label.to_string(), HeadingNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    /// Get a child by label.
    pub fn get(&self, label: &str) -> Option<&HeadingNode> {
        self.position(label).map(|idx| &self.children[idx].1)
    }

    /// Iterate over children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeadingNode)> {
        self.children.iter().map(|(l, n)| (l.as_str(), n))
    }

    /// Child labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.children.iter().map(|(l, _)| l.as_str()).collect()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of headings below this node, at any depth.
    pub fn count(&self) -> usize {
        self.children.iter().map(|(_, n)| 1 + n.count()).sum()
    }
}

impl Serialize for HeadingNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (label, child) in &self.children {
            map.serialize_entry(label, child)?;
        }
        map.end()
    }
}

/// Heading outline of a document.
///
/// Maps level-1 labels to level-2 labels to level-3 labels. Serializes as a
/// plain nested JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct HeadingTree {
    root: HeadingNode,
}

impl HeadingTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The implicit root whose children are the level-1 headings.
    pub fn root(&self) -> &HeadingNode {
        &self.root
    }

    /// Mutable access to the root.
    pub fn root_mut(&mut self) -> &mut HeadingNode {
        &mut self.root
    }

    /// Get a level-1 heading by label.
    pub fn get(&self, label: &str) -> Option<&HeadingNode> {
        self.root.get(label)
    }

    /// Follow a label path from the root, e.g. `["Intro", "Background"]`.
    pub fn path(&self, labels: &[&str]) -> Option<&HeadingNode> {
        labels
            .iter()
            .try_fold(&self.root, |node, label| node.get(label))
    }

    /// Iterate over level-1 headings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeadingNode)> {
        self.root.iter()
    }

    /// Number of level-1 headings.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Check if no heading was found.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Total number of headings at all levels.
    pub fn heading_count(&self) -> usize {
        self.root.count()
    }
}
