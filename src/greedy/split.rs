//! Information-gain split search for a single node and attribute.
//!
//! Numeric attributes sweep the sorted sample values, moving one value
//! level at a time from the right-hand class histogram to the left-hand
//! one. Categorical attributes evaluate a one-vs-rest split per level.

use crate::data::{AttributeKind, Dataset};
use crate::tree::{entropy, Node, Split, EPSILON};

/// Best split seen so far while scanning candidate attributes.
///
/// A candidate replaces the incumbent only on strictly greater gain, so the
/// first-evaluated attribute and threshold win ties.
#[derive(Debug, Clone)]
pub(crate) struct BestSplit {
    pub gain: f64,
    pub split: Option<Split>,
}

impl BestSplit {
    pub fn new() -> Self {
        Self {
            gain: f64::NEG_INFINITY,
            split: None,
        }
    }

    fn offer(&mut self, gain: f64, split: Split) {
        if gain > self.gain {
            self.gain = gain;
            self.split = Some(split);
        }
    }
}

/// Parent entropy minus the size-weighted entropy of the two children.
#[inline]
pub fn information_gain(
    parent_entropy: f64,
    n_left: usize,
    left_entropy: f64,
    n_right: usize,
    right_entropy: f64,
) -> f64 {
    let n = (n_left + n_right) as f64;
    parent_entropy - (n_left as f64 * left_entropy + n_right as f64 * right_entropy) / n
}

/// Scans `attribute` at `node` and offers every candidate split to `best`.
///
/// Attributes with a single distinct value at the node offer nothing.
pub(crate) fn search_attribute(
    dataset: &Dataset,
    node: &Node,
    attribute: usize,
    best: &mut BestSplit,
) {
    match dataset.kind(attribute) {
        AttributeKind::Numerical => search_numeric(dataset, node, attribute, best),
        AttributeKind::Categorical { levels } => {
            search_categorical(dataset, node, attribute, levels, best)
        }
    }
}

fn search_numeric(dataset: &Dataset, node: &Node, attribute: usize, best: &mut BestSplit) {
    let mut ordered: Vec<(f64, usize)> = node
        .samples
        .iter()
        .map(|&s| (dataset.value(s, attribute), dataset.label(s)))
        .collect();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut levels: Vec<f64> = ordered.iter().map(|&(v, _)| v).collect();
    levels.dedup();
    if levels.len() <= 1 {
        return;
    }

    let n = node.n_samples;
    let mut left = vec![0usize; dataset.n_classes()];
    let mut right = node.class_counts.clone();
    let mut index = 0;
    for level in levels {
        while index < n && ordered[index].0 < level + EPSILON {
            let class = ordered[index].1;
            left[class] += 1;
            right[class] -= 1;
            index += 1;
        }
        // Everything on the left leaves no split.
        if index == n {
            continue;
        }
        let gain = information_gain(
            node.entropy,
            index,
            entropy(&left, index),
            n - index,
            entropy(&right, n - index),
        );
        best.offer(
            gain,
            Split {
                attribute,
                threshold: level,
                kind: AttributeKind::Numerical,
            },
        );
    }
}

fn search_categorical(
    dataset: &Dataset,
    node: &Node,
    attribute: usize,
    levels: usize,
    best: &mut BestSplit,
) {
    let n_classes = dataset.n_classes();
    let mut level_counts = vec![0usize; levels];
    let mut level_class_counts = vec![0usize; levels * n_classes];
    for &s in &node.samples {
        let level = dataset.value(s, attribute) as usize;
        level_counts[level] += 1;
        level_class_counts[level * n_classes + dataset.label(s)] += 1;
    }

    let n = node.n_samples;
    let mut others = vec![0usize; n_classes];
    for level in 0..levels {
        let in_level = level_counts[level];
        if in_level == 0 || in_level == n {
            continue;
        }
        let in_level_classes = &level_class_counts[level * n_classes..(level + 1) * n_classes];
        for c in 0..n_classes {
            others[c] = node.class_counts[c] - in_level_classes[c];
        }
        let gain = information_gain(
            node.entropy,
            in_level,
            entropy(in_level_classes, in_level),
            n - in_level,
            entropy(&others, n - in_level),
        );
        best.offer(
            gain,
            Split {
                attribute,
                threshold: level as f64,
                kind: AttributeKind::Categorical { levels },
            },
        );
    }
}
