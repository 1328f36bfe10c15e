//! Neighborhood structures over attribute-assignment representations.

use crate::tree::parent;

/// Move structure used to enumerate neighbors of a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Exchange one assigned node's attribute with its parent's.
    #[default]
    Swap,
    /// Replace one assigned node's attribute by every other attribute.
    Replace,
}

impl Neighborhood {
    /// Enumerates every neighbor of `representation`, in index order.
    pub fn generate(
        &self,
        representation: &[Option<usize>],
        n_attributes: usize,
    ) -> Vec<Vec<Option<usize>>> {
        match self {
            Neighborhood::Swap => swap_neighbors(representation),
            Neighborhood::Replace => replace_neighbors(representation, n_attributes),
        }
    }
}

/// One neighbor per assigned non-root index `i`, with the attributes at
/// `i` and `parent(i)` exchanged.
pub fn swap_neighbors(representation: &[Option<usize>]) -> Vec<Vec<Option<usize>>> {
    (1..representation.len())
        .filter(|&i| representation[i].is_some())
        .map(|i| {
            let mut neighbor = representation.to_vec();
            neighbor.swap(i, parent(i));
            neighbor
        })
        .collect()
}

/// One neighbor per assigned index `i` (the final slot excluded) and per
/// attribute `a` other than the one assigned, with `i` reassigned to `a`.
pub fn replace_neighbors(
    representation: &[Option<usize>],
    n_attributes: usize,
) -> Vec<Vec<Option<usize>>> {
    let mut neighborhood = Vec::new();
    for i in 0..representation.len().saturating_sub(1) {
        let Some(current) = representation[i] else {
            continue;
        };
        for a in (0..n_attributes).filter(|&a| a != current) {
            let mut neighbor = representation.to_vec();
            neighbor[i] = Some(a);
            neighborhood.push(neighbor);
        }
    }
    neighborhood
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_with_parent() {
        let rep = vec![Some(0), Some(1), None, Some(2), None, None, None];
        let hood = swap_neighbors(&rep);
        assert_eq!(
            hood,
            vec![
                vec![Some(1), Some(0), None, Some(2), None, None, None],
                vec![Some(0), Some(2), None, Some(1), None, None, None],
            ]
        );
    }

    #[test]
    fn test_swap_root_only_has_no_neighbors() {
        assert!(swap_neighbors(&[Some(3), None, None]).is_empty());
    }

    #[test]
    fn test_replace_neighbors() {
        let rep = vec![Some(1), None, None];
        let hood = replace_neighbors(&rep, 3);
        assert_eq!(
            hood,
            vec![vec![Some(0), None, None], vec![Some(2), None, None]]
        );
    }

    #[test]
    fn test_generate_dispatch() {
        let rep = vec![Some(0), Some(1), None];
        assert_eq!(Neighborhood::Swap.generate(&rep, 2).len(), 1);
        assert_eq!(Neighborhood::Replace.generate(&rep, 2).len(), 2);
    }

    proptest! {
        #[test]
        fn swap_neighborhood_size_matches_assigned_non_root(
            rep in proptest::collection::vec(proptest::option::of(0usize..4), 15)
        ) {
            let k = rep[1..].iter().filter(|a| a.is_some()).count();
            prop_assert_eq!(swap_neighbors(&rep).len(), k);
        }

        #[test]
        fn swap_neighbors_differ_at_most_at_two_positions(
            rep in proptest::collection::vec(proptest::option::of(0usize..4), 7)
        ) {
            for neighbor in swap_neighbors(&rep) {
                let diff = neighbor.iter().zip(&rep).filter(|(a, b)| a != b).count();
                prop_assert!(diff <= 2);
            }
        }
    }
}
