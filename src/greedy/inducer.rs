//! Top-down recursive tree construction.

use super::split::{search_attribute, BestSplit};
use super::InductionMode;
use crate::data::Dataset;
use crate::error::{DtreeError, Result};
use crate::tree::{capacity, left_child, right_child, NodeType, Solution, MAX_DEPTH};
use rand::rngs::StdRng;
use rand::Rng;

/// Where the attribute(s) evaluated at a node come from.
enum AttributeSource<'r, R: ?Sized> {
    All,
    List,
    Random(&'r mut R),
}

/// Grows decision trees over one dataset with a fixed maximum depth.
///
/// # Examples
///
/// ```
/// use u_dtree::data::{AttributeKind, Dataset};
/// use u_dtree::greedy::GreedyInducer;
///
/// let data = Dataset::new(
///     vec![vec![0.0], vec![0.0], vec![1.0], vec![1.0]],
///     vec![0, 0, 1, 1],
///     vec![AttributeKind::Numerical],
///     2,
/// )
/// .unwrap();
/// let solution = GreedyInducer::new(&data, 1).unwrap().greedy().unwrap();
/// assert_eq!(solution.accuracy(), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyInducer<'a> {
    dataset: &'a Dataset,
    max_depth: usize,
}

impl<'a> GreedyInducer<'a> {
    /// Creates an inducer for trees of depth at most `max_depth`.
    ///
    /// Fails when `max_depth` exceeds [`MAX_DEPTH`].
    pub fn new(dataset: &'a Dataset, max_depth: usize) -> Result<Self> {
        if max_depth > MAX_DEPTH {
            return Err(DtreeError::DepthTooLarge {
                depth: max_depth,
                limit: MAX_DEPTH,
            });
        }
        Ok(Self { dataset, max_depth })
    }

    /// The training data.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Maximum tree depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// A root-only solution covering every sample.
    pub fn empty_solution(&self) -> Solution {
        Solution::new(self.dataset, self.max_depth)
    }

    /// Regrows `solution`'s tree from a fresh root and refreshes its metrics.
    ///
    /// Any existing tree is discarded; the representation is kept and read
    /// in [`InductionMode::AttributeList`]. `rng` is drawn from only in
    /// [`InductionMode::RandomAttribute`], once per splittable node, visiting
    /// left subtrees before right ones.
    pub fn induce<R: Rng>(
        &self,
        solution: &mut Solution,
        mode: InductionMode,
        rng: &mut R,
    ) -> Result<()> {
        let expected = capacity(self.max_depth);
        if solution.representation().len() != expected {
            return Err(DtreeError::RepresentationLength {
                expected,
                found: solution.representation().len(),
            });
        }
        solution.reset_tree(self.dataset);
        let mut source = match mode {
            InductionMode::Exhaustive => AttributeSource::All,
            InductionMode::AttributeList => AttributeSource::List,
            InductionMode::RandomAttribute => AttributeSource::Random(rng),
        };
        self.grow(solution, 0, 0, &mut source)?;
        solution.update_metrics();
        Ok(())
    }

    /// Classic greedy tree: every attribute is evaluated at every node.
    pub fn greedy(&self) -> Result<Solution> {
        let mut solution = self.empty_solution();
        self.grow::<StdRng>(&mut solution, 0, 0, &mut AttributeSource::All)?;
        solution.update_metrics();
        Ok(solution)
    }

    /// Tree whose split attributes are drawn uniformly at random; thresholds
    /// remain greedy.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Result<Solution> {
        let mut solution = self.empty_solution();
        self.induce(&mut solution, InductionMode::RandomAttribute, rng)?;
        Ok(solution)
    }

    /// Materializes a representation: each node splits on its assigned
    /// attribute, or stays a leaf when unassigned.
    pub fn decode(&self, representation: &[Option<usize>]) -> Result<Solution> {
        let mut solution =
            Solution::with_representation(self.dataset, self.max_depth, representation)?;
        self.grow::<StdRng>(&mut solution, 0, 0, &mut AttributeSource::List)?;
        solution.update_metrics();
        Ok(solution)
    }

    fn grow<R: Rng>(
        &self,
        solution: &mut Solution,
        k: usize,
        depth: usize,
        source: &mut AttributeSource<'_, R>,
    ) -> Result<()> {
        let node = solution.tree().node(k);
        if depth >= self.max_depth || node.is_pure() {
            return Ok(());
        }

        let n_attributes = self.dataset.n_attributes();
        let mut best = BestSplit::new();
        match source {
            AttributeSource::All => {
                for a in 0..n_attributes {
                    search_attribute(self.dataset, node, a, &mut best);
                }
            }
            AttributeSource::List => {
                let Some(a) = solution.representation()[k] else {
                    return Ok(());
                };
                if a >= n_attributes {
                    return Err(DtreeError::UnknownAttribute {
                        node: k,
                        attribute: a,
                        n_attributes,
                    });
                }
                search_attribute(self.dataset, node, a, &mut best);
            }
            AttributeSource::Random(rng) => {
                let a = rng.random_range(0..n_attributes);
                search_attribute(self.dataset, node, a, &mut best);
            }
        }

        // No candidate separates the samples: contradictory data at this node.
        let Some(split) = best.split else {
            return Ok(());
        };

        let (left, right) = (left_child(k), right_child(k));
        let tree = solution.tree_mut();
        let samples = {
            let node = tree.node_mut(k);
            node.node_type = NodeType::Internal;
            node.split = Some(split);
            node.samples.clone()
        };
        tree.node_mut(left).node_type = NodeType::Leaf;
        tree.node_mut(right).node_type = NodeType::Leaf;
        for s in samples {
            let child = if split.goes_left(self.dataset.value(s, split.attribute)) {
                left
            } else {
                right
            };
            tree.node_mut(child).add_sample(s, self.dataset.label(s));
        }
        tree.node_mut(left).evaluate();
        tree.node_mut(right).evaluate();

        self.grow(solution, left, depth + 1, source)?;
        self.grow(solution, right, depth + 1, source)
    }
}
