//! Greedy top-down tree induction by information gain.
//!
//! [`GreedyInducer`] grows a [`Solution`](crate::tree::Solution) from its
//! root. At every node it stops when the maximum depth is reached or the
//! node is pure; otherwise it searches the attributes allowed by the
//! [`InductionMode`] for the split with the highest information gain,
//! partitions the node's samples, and recurses into both children.
//!
//! # References
//!
//! - Quinlan (1986), "Induction of Decision Trees", *Machine Learning* 1, 81-106.
//! - Breiman et al. (1984), *Classification and Regression Trees*.

mod inducer;
mod split;

pub use inducer::GreedyInducer;
pub use split::information_gain;

/// Which attributes are evaluated at each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductionMode {
    /// Every attribute; the best (attribute, threshold) pair wins.
    Exhaustive,
    /// Only the attribute assigned to the node by the solution's
    /// representation; unassigned nodes become leaves.
    AttributeList,
    /// One attribute drawn uniformly at random; the threshold is still greedy.
    RandomAttribute,
}
