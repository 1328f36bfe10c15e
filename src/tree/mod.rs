//! Fixed-capacity decision tree model.
//!
//! A tree of maximum depth `d` is stored as a complete binary array of
//! `2^(d+1) - 1` [`Node`]s. Parent and children are derived from the index:
//! `parent(k) = (k - 1) / 2`, `left(k) = 2k + 1`, `right(k) = 2k + 2`.
//!
//! A [`Solution`] pairs a tree with its attribute-assignment representation,
//! the flat array holding the split attribute chosen at each position
//! (`None` for leaves and unused positions).

mod node;
mod solution;

pub use node::{entropy, Node, NodeType, Split, EPSILON};
pub use solution::Solution;

use crate::data::Dataset;
use std::fmt;

/// Deepest tree supported; the arena for depth `d` holds `2^(d+1) - 1` nodes.
pub const MAX_DEPTH: usize = 20;

/// Number of positions in a complete binary tree of depth `max_depth`.
#[inline]
pub fn capacity(max_depth: usize) -> usize {
    (1usize << (max_depth + 1)) - 1
}

/// Index of the parent of a non-root position.
#[inline]
pub fn parent(k: usize) -> usize {
    (k - 1) / 2
}

/// Index of the left child.
#[inline]
pub fn left_child(k: usize) -> usize {
    2 * k + 1
}

/// Index of the right child.
#[inline]
pub fn right_child(k: usize) -> usize {
    2 * k + 2
}

/// Renders a representation as `[ a;b;-1; ]`, with `-1` for unassigned positions.
pub fn format_representation(representation: &[Option<usize>]) -> String {
    let mut out = String::from("[ ");
    for entry in representation {
        match entry {
            Some(a) => out.push_str(&a.to_string()),
            None => out.push_str("-1"),
        }
        out.push(';');
    }
    out.push_str(" ]");
    out
}

/// Arena of nodes forming a complete binary tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    nodes: Vec<Node>,
    max_depth: usize,
}

impl Tree {
    /// Creates a tree whose root is a leaf holding every sample.
    pub(crate) fn new(dataset: &Dataset, max_depth: usize) -> Self {
        let mut nodes = vec![Node::empty(dataset.n_classes()); capacity(max_depth)];
        let root = &mut nodes[0];
        root.node_type = NodeType::Leaf;
        for s in 0..dataset.n_samples() {
            root.add_sample(s, dataset.label(s));
        }
        root.evaluate();
        Self { nodes, max_depth }
    }

    /// Maximum depth the tree may grow to.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// All positions, in array order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at position `k`.
    pub fn node(&self, k: usize) -> &Node {
        &self.nodes[k]
    }

    pub(crate) fn node_mut(&mut self, k: usize) -> &mut Node {
        &mut self.nodes[k]
    }

    /// Number of array positions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Samples reaching the root.
    pub fn n_samples(&self) -> usize {
        self.nodes[0].n_samples
    }

    /// Samples whose leaf predicts a different class.
    pub fn misclassified(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Leaf)
            .map(Node::misclassified)
            .sum()
    }

    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Leaf)
            .count()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in 0..=self.max_depth {
            let first = (1usize << d) - 1;
            let last = (1usize << (d + 1)) - 1;
            for (i, node) in self.nodes[first..last].iter().enumerate() {
                let k = first + i;
                match node.node_type {
                    NodeType::Internal => {
                        if let Some(split) = &node.split {
                            write!(
                                f,
                                "(N{},A[{}]{}{}) ",
                                k,
                                split.attribute,
                                split.kind.operator(),
                                split.threshold
                            )?;
                        }
                    }
                    NodeType::Leaf => write!(
                        f,
                        "(L{},C{},{},{}) ",
                        k,
                        node.majority_class,
                        node.majority_count,
                        node.misclassified()
                    )?,
                    NodeType::Null => {}
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AttributeKind;

    fn tiny() -> Dataset {
        Dataset::new(
            vec![vec![0.0], vec![0.0], vec![1.0]],
            vec![0, 0, 1],
            vec![AttributeKind::Numerical],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(capacity(0), 1);
        assert_eq!(capacity(2), 7);
        assert_eq!(left_child(1), 3);
        assert_eq!(right_child(1), 4);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(4), 1);
        assert_eq!(parent(2), 0);
    }

    #[test]
    fn test_new_tree_is_root_leaf() {
        let tree = Tree::new(&tiny(), 2);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.node(0).node_type, NodeType::Leaf);
        assert_eq!(tree.node(0).samples, vec![0, 1, 2]);
        assert_eq!(tree.node(0).majority_class, 0);
        assert!(tree.nodes()[1..].iter().all(|n| n.node_type == NodeType::Null));
        assert_eq!(tree.misclassified(), 1);
        assert_eq!(tree.n_leaves(), 1);
    }

    #[test]
    fn test_display_root_leaf() {
        let tree = Tree::new(&tiny(), 1);
        assert_eq!(tree.to_string(), "(L0,C0,2,1) \n\n");
    }

    #[test]
    fn test_format_representation() {
        assert_eq!(
            format_representation(&[Some(2), None, Some(0)]),
            "[ 2;-1;0; ]"
        );
    }
}
