//! Wagner–Fischer diff strategy
//!
//! Classic dynamic-programming edit distance producing a full edit script,
//! including substitutions.
//!
//! # Algorithm
//!
//! The edit-distance matrix is computed row by row; only the previous row
//! is retained. Slot `k` of a row holds the edit list transforming the
//! consumed origin prefix into the first `k` destination elements. Equal
//! elements take the diagonal for free; otherwise the cheapest of the three
//! predecessors wins, with ties broken in evaluation order: top (deletion),
//! then left (insertion), then diagonal (substitution). Cost is the
//! unweighted count of accumulated edits.
//!
//! # Complexity
//!
//! O(n·m) time with O(m) row storage, but each slot owns a growing edit
//! list, so worst-case storage is O(n·m·(n+m)). Sized for UI lists, not
//! bulk text.
//!
//! Unlike the positional strategy this tolerates duplicate values: the
//! script is always valid, though duplicates carry no stable identity
//! beyond their position.

use std::hash::Hash;

use smallvec::SmallVec;

use crate::edit::Edit;

use super::{DiffStrategy, trivial_diff};

/// Edit lists per DP slot stay inline for the small diffs this is built for.
type EditList<T> = SmallVec<[Edit<T>; 4]>;

/// Dynamic-programming strategy. See the module docs for the algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct WagnerFischerDiff;

impl<T> DiffStrategy<T> for WagnerFischerDiff
where
    T: Eq + Hash + Clone,
{
    fn diff(&self, old: &[T], new: &[T]) -> Vec<Edit<T>> {
        if let Some(edits) = trivial_diff(old, new) {
            return edits;
        }

        let m = new.len();

        // Row 0: transforming the empty origin prefix into new[..k]
        let mut prev: Vec<EditList<T>> = Vec::with_capacity(m + 1);
        prev.push(EditList::new());
        for (k, value) in new.iter().enumerate() {
            let mut slot = prev[k].clone();
            slot.push(Edit::Insert { value: value.clone(), index: k });
            prev.push(slot);
        }

        let mut cur: Vec<EditList<T>> = vec![EditList::new(); m + 1];
        for (i, old_item) in old.iter().enumerate() {
            // Column 0: transforming old[..=i] into the empty destination
            cur[0] = prev[0].clone();
            cur[0].push(Edit::Delete { value: old_item.clone(), index: i });

            for (j, new_item) in new.iter().enumerate() {
                if old_item == new_item {
                    cur[j + 1] = prev[j].clone();
                    continue;
                }

                let top = prev[j + 1].len();
                let left = cur[j].len();
                let diagonal = prev[j].len();
                let best = top.min(left).min(diagonal);

                cur[j + 1] = if top == best {
                    let mut slot = prev[j + 1].clone();
                    slot.push(Edit::Delete { value: old_item.clone(), index: i });
                    slot
                } else if left == best {
                    let mut slot = cur[j].clone();
                    slot.push(Edit::Insert { value: new_item.clone(), index: j });
                    slot
                } else {
                    let mut slot = prev[j].clone();
                    slot.push(Edit::Substitute { value: new_item.clone(), index: j });
                    slot
                };
            }

            std::mem::swap(&mut prev, &mut cur);
        }

        prev.pop().map(SmallVec::into_vec).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;

    fn diff(old: &[char], new: &[char]) -> Vec<Edit<char>> {
        WagnerFischerDiff.diff(old, new)
    }

    #[test]
    fn test_empty_sequences() {
        assert!(diff(&[], &[]).is_empty());
    }

    #[test]
    fn test_insert_all() {
        let edits = diff(&[], &['x', 'y']);
        assert_eq!(
            edits,
            vec![
                Edit::Insert { value: 'x', index: 0 },
                Edit::Insert { value: 'y', index: 1 },
            ]
        );
    }

    #[test]
    fn test_delete_all() {
        let edits = diff(&['x', 'y'], &[]);
        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: 'x', index: 0 },
                Edit::Delete { value: 'y', index: 1 },
            ]
        );
    }

    #[test]
    fn test_identity() {
        assert!(diff(&['a', 'b', 'c'], &['a', 'b', 'c']).is_empty());
    }

    #[test]
    fn test_single_substitution() {
        let edits = diff(&['a', 'b', 'c'], &['a', 'x', 'c']);
        assert_eq!(edits, vec![Edit::Substitute { value: 'x', index: 1 }]);
    }

    #[test]
    fn test_single_element_mismatch_is_substitution() {
        let edits = diff(&['a'], &['b']);
        assert_eq!(edits, vec![Edit::Substitute { value: 'b', index: 0 }]);
    }

    #[test]
    fn test_minimal_insert() {
        let edits = diff(&['a', 'c'], &['a', 'b', 'c']);
        assert_eq!(edits, vec![Edit::Insert { value: 'b', index: 1 }]);
    }

    #[test]
    fn test_minimal_delete() {
        let edits = diff(&['a', 'b'], &['b']);
        assert_eq!(edits, vec![Edit::Delete { value: 'a', index: 0 }]);
    }

    #[test]
    fn test_reversal_substitutes_ends() {
        let edits = diff(&['a', 'b', 'c'], &['c', 'b', 'a']);
        assert_eq!(
            edits,
            vec![
                Edit::Substitute { value: 'c', index: 0 },
                Edit::Substitute { value: 'a', index: 2 },
            ]
        );
    }

    #[test]
    fn test_script_is_minimal_unit_cost() {
        // kitten -> sitting is the textbook distance-3 pair
        let old: Vec<char> = "kitten".chars().collect();
        let new: Vec<char> = "sitting".chars().collect();
        let edits = WagnerFischerDiff.diff(&old, &new);
        assert_eq!(edits.len(), 3);
        assert_eq!(apply(&old, &edits).unwrap(), new);
    }

    #[test]
    fn test_duplicates_still_produce_valid_script() {
        let old = ['a', 'a', 'b'];
        let new = ['a', 'b', 'a'];
        let edits = diff(&old, &new);
        assert_eq!(apply(&old, &edits).unwrap(), new);
    }

    #[test]
    fn test_round_trip_mixed_script() {
        let old: Vec<char> = "abcdef".chars().collect();
        let new: Vec<char> = "axcfeb".chars().collect();
        let edits = WagnerFischerDiff.diff(&old, &new);
        assert_eq!(apply(&old, &edits).unwrap(), new);
    }
}
