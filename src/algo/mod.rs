//! Diff strategy implementations.
//!
//! - `positional`: single-pass union-scan heuristic with move-aware output
//! - `wagner_fischer`: classic dynamic-programming edit distance with
//!   substitutions
//!
//! Both implement [`DiffStrategy`]; callers pick one explicitly.

use std::hash::Hash;

use crate::edit::Edit;

mod positional;
mod wagner_fischer;

pub use positional::PositionalDiff;
pub use wagner_fischer::WagnerFischerDiff;

/// A diff algorithm: computes the edits transforming `old` into `new`.
///
/// Implementations are pure functions of their inputs; no state is shared
/// across invocations. The returned list is raw strategy output; apply
/// [`crate::reduce`] (or use the top-level `diff` entry point) to collapse
/// insert/delete pairs into moves.
pub trait DiffStrategy<T>
where
    T: Eq + Hash + Clone,
{
    /// Compute the edit script transforming `old` into `new`
    fn diff(&self, old: &[T], new: &[T]) -> Vec<Edit<T>>;
}

/// Degenerate-input shortcut shared by both strategies.
///
/// Returns `Some` when at least one side is empty: no edits when both are,
/// otherwise one insertion or deletion per element in original order.
pub(crate) fn trivial_diff<T>(old: &[T], new: &[T]) -> Option<Vec<Edit<T>>>
where
    T: Eq + Hash + Clone,
{
    if old.is_empty() && new.is_empty() {
        return Some(Vec::new());
    }

    if old.is_empty() {
        return Some(
            new.iter()
                .cloned()
                .enumerate()
                .map(|(index, value)| Edit::Insert { value, index })
                .collect(),
        );
    }

    if new.is_empty() {
        return Some(
            old.iter()
                .cloned()
                .enumerate()
                .map(|(index, value)| Edit::Delete { value, index })
                .collect(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_both_empty() {
        let edits = trivial_diff::<char>(&[], &[]).unwrap();
        assert!(edits.is_empty());
    }

    #[test]
    fn test_trivial_empty_origin() {
        let edits = trivial_diff(&[], &['a', 'b']).unwrap();
        assert_eq!(
            edits,
            vec![
                Edit::Insert { value: 'a', index: 0 },
                Edit::Insert { value: 'b', index: 1 },
            ]
        );
    }

    #[test]
    fn test_trivial_empty_destination() {
        let edits = trivial_diff(&['a', 'b'], &[]).unwrap();
        assert_eq!(
            edits,
            vec![
                Edit::Delete { value: 'a', index: 0 },
                Edit::Delete { value: 'b', index: 1 },
            ]
        );
    }

    #[test]
    fn test_trivial_declines_nonempty() {
        assert!(trivial_diff(&['a'], &['b']).is_none());
    }
}
