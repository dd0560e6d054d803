//! Positional (index-set) diff strategy
//!
//! Single-pass heuristic over the union of values from both sequences,
//! using positional bookkeeping instead of an edit-distance matrix.
//!
//! # Algorithm
//!
//! 1. Build an [`IndexedSet`] for each sequence (value ↔ position).
//! 2. Walk every distinct value, keeping two running sets of positions:
//!    destination positions already consumed by an insertion and origin
//!    positions already consumed by a deletion.
//! 3. A value present at origin `s` and destination `t` is in place iff
//!    `s + adjust == t`, where `adjust = |insertions ≤ s| − |deletions ≤ s|`.
//!    Otherwise it is recorded as a deletion at `s` plus an insertion at
//!    `t` (a move-pair candidate for the reduction pass). Values on one
//!    side only become plain deletions or insertions.
//!
//! The union is walked in a fixed order (values present in the origin by
//! ascending origin index, then destination-only values by ascending
//! destination index), so the emitted edit list is reproducible. With this
//! order the in-place rule above guarantees that matched values keep
//! consistent relative positions, which is what makes the output
//! reconstruct the destination exactly when applied.
//!
//! # Complexity
//!
//! O((n + m) log k) where k is the number of recorded edits; effectively
//! O(n + m) for the small edit counts this is intended for.
//!
//! # Limitation
//!
//! Assumes values are unique within each sequence. With duplicates the
//! value ↔ position maps collapse and the output is undefined; use
//! [`WagnerFischerDiff`](super::WagnerFischerDiff) instead.

use std::collections::BTreeSet;
use std::hash::Hash;

use crate::edit::Edit;
use crate::indexed_set::IndexedSet;

use super::{DiffStrategy, trivial_diff};

/// Union-scan heuristic strategy. See the module docs for the algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalDiff;

impl<T> DiffStrategy<T> for PositionalDiff
where
    T: Eq + Hash + Clone,
{
    fn diff(&self, old: &[T], new: &[T]) -> Vec<Edit<T>> {
        if let Some(edits) = trivial_diff(old, new) {
            return edits;
        }

        let old_index: IndexedSet<usize, T> = old.iter().cloned().enumerate().collect();
        let new_index: IndexedSet<usize, T> = new.iter().cloned().enumerate().collect();
        debug_assert_eq!(old_index.len(), old.len(), "duplicate value in origin");
        debug_assert_eq!(new_index.len(), new.len(), "duplicate value in destination");

        let mut insertions: BTreeSet<usize> = BTreeSet::new();
        let mut deletions: BTreeSet<usize> = BTreeSet::new();
        let mut edits = Vec::new();

        // Values present in the origin, ascending origin index
        for (s, value) in old.iter().enumerate() {
            match new_index.index_of(value) {
                Some(&t) => {
                    let adjust = insertions.range(..=s).count() as isize
                        - deletions.range(..=s).count() as isize;
                    if s as isize + adjust == t as isize {
                        // Position difference fully explained by edits
                        // already recorded for other values
                        continue;
                    }
                    edits.push(Edit::Delete { value: value.clone(), index: s });
                    edits.push(Edit::Insert { value: value.clone(), index: t });
                    deletions.insert(s);
                    insertions.insert(t);
                }
                None => {
                    edits.push(Edit::Delete { value: value.clone(), index: s });
                    deletions.insert(s);
                }
            }
        }

        // Destination-only values, ascending destination index
        for (t, value) in new.iter().enumerate() {
            if old_index.contains_value(value) {
                continue;
            }
            edits.push(Edit::Insert { value: value.clone(), index: t });
            insertions.insert(t);
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;
    use crate::edit::reduce;

    fn diff(old: &[i32], new: &[i32]) -> Vec<Edit<i32>> {
        PositionalDiff.diff(old, new)
    }

    #[test]
    fn test_empty_sequences() {
        assert!(diff(&[], &[]).is_empty());
    }

    #[test]
    fn test_insert_all() {
        let edits = diff(&[], &[1, 2, 3]);
        assert_eq!(
            edits,
            vec![
                Edit::Insert { value: 1, index: 0 },
                Edit::Insert { value: 2, index: 1 },
                Edit::Insert { value: 3, index: 2 },
            ]
        );
    }

    #[test]
    fn test_delete_all() {
        let edits = diff(&[1, 2, 3], &[]);
        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: 1, index: 0 },
                Edit::Delete { value: 2, index: 1 },
                Edit::Delete { value: 3, index: 2 },
            ]
        );
    }

    #[test]
    fn test_identity() {
        assert!(diff(&[1, 2, 3, 4], &[1, 2, 3, 4]).is_empty());
    }

    #[test]
    fn test_single_delete_explains_shift() {
        // Removing the head shifts every survivor by one; the adjustment
        // counting recognizes them as unchanged.
        let edits = diff(&[1, 2, 3], &[2, 3]);
        assert_eq!(edits, vec![Edit::Delete { value: 1, index: 0 }]);
    }

    #[test]
    fn test_single_insert_midway() {
        let edits = diff(&[1, 3], &[1, 2, 3]);
        // The heuristic sees 3 displaced before it sees the insertion of 2,
        // so it emits a move-pair for 3 alongside the plain insertion.
        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: 3, index: 1 },
                Edit::Insert { value: 3, index: 2 },
                Edit::Insert { value: 2, index: 1 },
            ]
        );
        let reduced = reduce(edits);
        assert_eq!(reduced.len(), 2);
        assert!(reduced.contains(&Edit::Move { value: 3, from: 1, to: 2 }));
        assert!(reduced.contains(&Edit::Insert { value: 2, index: 1 }));
    }

    #[test]
    fn test_rotation_reduces_to_moves() {
        let edits = reduce(diff(&[1, 2, 3], &[3, 1, 2]));
        assert!(edits.len() <= 3);
        assert!(edits.iter().all(Edit::is_move));
        assert!(edits.contains(&Edit::Move { value: 3, from: 2, to: 0 }));
        assert!(edits.contains(&Edit::Move { value: 1, from: 0, to: 1 }));
        assert!(edits.contains(&Edit::Move { value: 2, from: 1, to: 2 }));
    }

    #[test]
    fn test_head_to_tail_shift_yields_only_moves() {
        let old = [1, 2, 3, 4, 5];
        let new = [2, 3, 4, 5, 1];
        let edits = reduce(diff(&old, &new));
        // The adjustment counting also flags the last survivor (its own
        // destination insertion sits at or before its origin index), so
        // the reduced script is one or two moves depending on shape.
        assert!(edits.iter().all(Edit::is_move));
        assert!(edits.len() <= 2);
        assert!(edits.contains(&Edit::Move { value: 1, from: 0, to: 4 }));
        assert_eq!(apply(&old, &edits).unwrap(), new);
    }

    #[test]
    fn test_mixed_operations() {
        let edits = reduce(diff(&[1, 2, 3, 4], &[1, 5, 3]));
        assert!(edits.contains(&Edit::Delete { value: 2, index: 1 }));
        assert!(edits.contains(&Edit::Delete { value: 4, index: 3 }));
        assert!(edits.contains(&Edit::Insert { value: 5, index: 1 }));
        // 3 sits at origin position 2 and destination position 2, but the
        // surrounding edits displace it, so it surfaces as an in-place move.
        assert!(edits.contains(&Edit::Move { value: 3, from: 2, to: 2 }));
    }

    #[test]
    fn test_disjoint_sequences() {
        let edits = diff(&[1, 2], &[3, 4]);
        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: 1, index: 0 },
                Edit::Delete { value: 2, index: 1 },
                Edit::Insert { value: 3, index: 0 },
                Edit::Insert { value: 4, index: 1 },
            ]
        );
    }

    #[test]
    fn test_deterministic_output() {
        let old = [5, 1, 4, 2, 8, 7];
        let new = [7, 1, 9, 2, 4];
        assert_eq!(diff(&old, &new), diff(&old, &new));
    }
}
