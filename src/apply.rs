//! Edit-script application
//!
//! Reconstructs the destination sequence by applying a diff's edits to the
//! origin. This is the reference consumer of the edit-operation contract:
//!
//! 1. deletions and move origins, by origin index, highest to lowest;
//! 2. insertions and move destinations, by destination index, ascending;
//! 3. substitutions, by destination index.
//!
//! A `Move` is applied as its delete/insert pair, so reduced and unreduced
//! scripts produce the same result. UI consumers with their own batch-update
//! semantics can partition edits by kind instead; this module makes the
//! round-trip guarantee concrete and testable.

use std::hash::Hash;

use crate::edit::Edit;
use crate::error::{ApplyError, ApplyResult};

/// Apply an edit script to `old`, returning the reconstructed destination
/// sequence.
///
/// Edit order within the script is irrelevant; edits are partitioned by
/// kind and applied per the consumer contract above.
///
/// # Errors
///
/// Returns [`ApplyError`] when an edit does not fit the sequence: an index
/// out of range, or a deletion whose recorded value is not the element at
/// its origin index.
///
/// # Example
///
/// ```
/// use seqdiff::{apply, diff};
///
/// let old = vec!['a', 'b', 'c'];
/// let new = vec!['c', 'a', 'd'];
/// let edits = diff(&old, &new);
/// assert_eq!(apply(&old, &edits).unwrap(), new);
/// ```
pub fn apply<T>(old: &[T], edits: &[Edit<T>]) -> ApplyResult<Vec<T>>
where
    T: Eq + Hash + Clone,
{
    let mut removals: Vec<(usize, &T)> = Vec::new();
    let mut placements: Vec<(usize, &T)> = Vec::new();
    let mut substitutions: Vec<(usize, &T)> = Vec::new();

    for edit in edits {
        match edit {
            Edit::Insert { value, index } => placements.push((*index, value)),
            Edit::Delete { value, index } => removals.push((*index, value)),
            Edit::Substitute { value, index } => substitutions.push((*index, value)),
            Edit::Move { value, from, to } => {
                removals.push((*from, value));
                placements.push((*to, value));
            }
        }
    }

    let mut result: Vec<T> = old.to_vec();

    removals.sort_by(|(a, _), (b, _)| b.cmp(a));
    for (index, value) in removals {
        if index >= result.len() {
            return Err(ApplyError::IndexOutOfBounds { index, len: result.len() });
        }
        if result[index] != *value {
            return Err(ApplyError::ValueMismatch { index });
        }
        result.remove(index);
    }

    placements.sort_by_key(|(index, _)| *index);
    for (index, value) in placements {
        if index > result.len() {
            return Err(ApplyError::IndexOutOfBounds { index, len: result.len() });
        }
        result.insert(index, value.clone());
    }

    for (index, value) in substitutions {
        if index >= result.len() {
            return Err(ApplyError::IndexOutOfBounds { index, len: result.len() });
        }
        result[index] = value.clone();
    }

    Ok(result)
}
