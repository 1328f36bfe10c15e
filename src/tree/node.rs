//! Tree node state: sample partition, class histogram, split.

use crate::data::AttributeKind;

/// Absorbs floating-point noise when comparing a value with a threshold.
pub const EPSILON: f64 = 1e-6;

/// Role of a position in the complete binary array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    /// Position not reached by the tree.
    #[default]
    Null,
    /// Terminal node predicting its majority class.
    Leaf,
    /// Node routing its samples to two children.
    Internal,
}

/// Univariate split test applied at an internal node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    /// Attribute tested.
    pub attribute: usize,
    /// Numeric threshold or categorical level code.
    pub threshold: f64,
    /// Kind of the tested attribute.
    pub kind: AttributeKind,
}

impl Split {
    /// Whether a sample with `value` is routed to the left child.
    #[inline]
    pub fn goes_left(&self, value: f64) -> bool {
        match self.kind {
            AttributeKind::Numerical => value < self.threshold + EPSILON,
            AttributeKind::Categorical { .. } => {
                value < self.threshold + EPSILON && value > self.threshold - EPSILON
            }
        }
    }
}

/// One position of a [`Tree`](super::Tree).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Role of the node.
    pub node_type: NodeType,
    /// Split applied when the node is internal.
    pub split: Option<Split>,
    /// Indices of the training samples reaching this node.
    pub samples: Vec<usize>,
    /// Sample count per class.
    pub class_counts: Vec<usize>,
    /// Number of samples at this node.
    pub n_samples: usize,
    /// Most frequent class (lowest index on ties).
    pub majority_class: usize,
    /// Number of samples of the majority class.
    pub majority_count: usize,
    /// Class entropy in bits.
    pub entropy: f64,
}

impl Node {
    pub(crate) fn empty(n_classes: usize) -> Self {
        Self {
            node_type: NodeType::Null,
            split: None,
            samples: Vec::new(),
            class_counts: vec![0; n_classes],
            n_samples: 0,
            majority_class: 0,
            majority_count: 0,
            entropy: 0.0,
        }
    }

    pub(crate) fn add_sample(&mut self, sample: usize, label: usize) {
        self.samples.push(sample);
        self.class_counts[label] += 1;
        self.n_samples += 1;
    }

    /// Recomputes entropy and majority class from the class histogram.
    pub(crate) fn evaluate(&mut self) {
        self.entropy = entropy(&self.class_counts, self.n_samples);
        self.majority_class = 0;
        self.majority_count = 0;
        for (c, &count) in self.class_counts.iter().enumerate() {
            if count > self.majority_count {
                self.majority_count = count;
                self.majority_class = c;
            }
        }
    }

    /// Whether every sample belongs to the majority class.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.majority_count == self.n_samples
    }

    /// Samples not of the majority class.
    #[inline]
    pub fn misclassified(&self) -> usize {
        self.n_samples - self.majority_count
    }
}

/// Shannon entropy (base 2) of a class histogram holding `total` samples.
///
/// Empty classes contribute nothing; an empty histogram has entropy 0.
pub fn entropy(class_counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    class_counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let frac = c as f64 / total;
            -frac * frac.log2()
        })
        .sum()
}
