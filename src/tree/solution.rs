//! A tree together with its attribute-assignment representation and metrics.

use super::{capacity, NodeType, Tree};
use crate::data::Dataset;
use crate::error::{DtreeError, Result};

/// Candidate decision tree evaluated by the metaheuristics.
///
/// The representation and the tree are kept consistent: either the tree
/// is decoded *from* the representation, or [`update_metrics`](Self::update_metrics)
/// derives the representation *from* the tree after induction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    tree: Tree,
    representation: Vec<Option<usize>>,
    n_misclassified: usize,
    accuracy: f64,
}

impl Solution {
    /// Creates a root-only solution covering every sample.
    pub(crate) fn new(dataset: &Dataset, max_depth: usize) -> Self {
        let mut solution = Self {
            tree: Tree::new(dataset, max_depth),
            representation: vec![None; capacity(max_depth)],
            n_misclassified: 0,
            accuracy: 0.0,
        };
        solution.update_metrics();
        solution
    }

    /// Creates a root-only solution carrying `representation`, ready to be
    /// decoded in attribute-list mode.
    pub(crate) fn with_representation(
        dataset: &Dataset,
        max_depth: usize,
        representation: &[Option<usize>],
    ) -> Result<Self> {
        let mut solution = Self::new(dataset, max_depth);
        solution.set_representation(representation)?;
        Ok(solution)
    }

    /// The decision tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Replaces the tree by a root-only one, keeping the representation.
    pub(crate) fn reset_tree(&mut self, dataset: &Dataset) {
        self.tree = Tree::new(dataset, self.tree.max_depth());
    }

    /// Attribute assigned to each tree position.
    pub fn representation(&self) -> &[Option<usize>] {
        &self.representation
    }

    /// Overwrites the representation without touching the tree.
    pub(crate) fn set_representation(&mut self, representation: &[Option<usize>]) -> Result<()> {
        if representation.len() != self.representation.len() {
            return Err(DtreeError::RepresentationLength {
                expected: self.representation.len(),
                found: representation.len(),
            });
        }
        self.representation.copy_from_slice(representation);
        Ok(())
    }

    /// Training samples misclassified by the tree.
    pub fn n_misclassified(&self) -> usize {
        self.n_misclassified
    }

    /// Fraction of training samples classified correctly.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Number of training samples.
    pub fn n_samples(&self) -> usize {
        self.tree.n_samples()
    }

    /// Accuracy recomputed from the leaves, ignoring the stored value.
    pub fn recompute_accuracy(&self) -> f64 {
        let n = self.n_samples();
        (n - self.tree.misclassified()) as f64 / n as f64
    }

    /// Derives the representation from the tree and recomputes the
    /// misclassification count and accuracy.
    pub fn update_metrics(&mut self) {
        for (slot, node) in self.representation.iter_mut().zip(self.tree.nodes()) {
            *slot = match node.node_type {
                NodeType::Internal => node.split.map(|s| s.attribute),
                _ => None,
            };
        }
        self.n_misclassified = self.tree.misclassified();
        let n = self.n_samples();
        self.accuracy = (n - self.n_misclassified) as f64 / n as f64;
    }
}
