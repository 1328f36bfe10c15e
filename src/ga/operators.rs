//! Subtree crossover over attribute-assignment representations.
//!
//! Two parents exchange every assignment inside the subtree rooted at a
//! position where both of them split, producing two complementary children.

use crate::tree::left_child;

/// Positions where both parents hold an attribute, excluding the root and
/// the final array slot.
pub fn swap_candidates(parent1: &[Option<usize>], parent2: &[Option<usize>]) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    (1..parent1.len().saturating_sub(1))
        .filter(|&i| parent1[i].is_some() && parent2[i].is_some())
        .collect()
}

/// Positions of the subtree rooted at `root` within an array of `len`
/// positions, in depth-first order from an explicit stack.
pub fn subtree_positions(root: usize, len: usize) -> Vec<usize> {
    let mut visited = Vec::new();
    let mut stack = vec![root];
    while let Some(k) = stack.pop() {
        visited.push(k);
        let left = left_child(k);
        if left < len {
            stack.push(left);
            stack.push(left + 1);
        }
    }
    visited
}

/// Exchanges the subtrees rooted at `swap_root` between two parents.
///
/// Returns the two children: the first is `parent1` carrying `parent2`'s
/// subtree, the second the converse.
///
/// # Panics
/// Panics if the parents have different lengths or `swap_root` is out of range.
pub fn subtree_crossover(
    parent1: &[Option<usize>],
    parent2: &[Option<usize>],
    swap_root: usize,
) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(swap_root < parent1.len(), "swap root out of range");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    for k in subtree_positions(swap_root, parent1.len()) {
        std::mem::swap(&mut child1[k], &mut child2[k]);
    }
    (child1, child2)
}
