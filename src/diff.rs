//! Top-level diff entry points
//!
//! [`diff`] covers the common case: positional strategy plus move
//! reduction. [`diff_with`] takes an explicit strategy and options for
//! callers that need the dynamic-programming strategy or raw
//! (insert/delete-only) output.
//!
//! Every invocation is a pure function of its two inputs; all intermediate
//! structures are local and discarded on return, and the caller owns the
//! returned edit list outright.

use std::hash::Hash;

use tracing::debug;

use crate::algo::{DiffStrategy, PositionalDiff};
use crate::edit::{Edit, reduce};

/// Options controlling post-processing of a strategy's raw output.
#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    /// Collapse matching insert/delete pairs into `Move` edits.
    /// Default: true
    pub reduce_moves: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { reduce_moves: true }
    }
}

impl DiffOptions {
    /// Keep the strategy's raw output: no move reduction.
    pub fn raw() -> Self {
        Self { reduce_moves: false }
    }
}

/// Diff two sequences with the positional strategy and move reduction.
///
/// Values must be unique within each sequence; see the crate docs for the
/// duplicate-value limitation and [`diff_with`] for strategy selection.
///
/// # Example
///
/// ```
/// use seqdiff::{diff, Edit};
///
/// let edits = diff(&[1, 2, 3], &[3, 1, 2]);
/// assert_eq!(
///     edits,
///     vec![
///         Edit::Move { value: 3, from: 2, to: 0 },
///         Edit::Move { value: 1, from: 0, to: 1 },
///         Edit::Move { value: 2, from: 1, to: 2 },
///     ]
/// );
/// ```
pub fn diff<T>(old: &[T], new: &[T]) -> Vec<Edit<T>>
where
    T: Eq + Hash + Clone,
{
    diff_with(old, new, &PositionalDiff, DiffOptions::default())
}

/// Diff two sequences with an explicit strategy and options.
///
/// # Example
///
/// ```
/// use seqdiff::{diff_with, DiffOptions, Edit, WagnerFischerDiff};
///
/// let edits = diff_with(&['a', 'b'], &['a', 'x'], &WagnerFischerDiff, DiffOptions::raw());
/// assert_eq!(edits, vec![Edit::Substitute { value: 'x', index: 1 }]);
/// ```
pub fn diff_with<T, S>(old: &[T], new: &[T], strategy: &S, options: DiffOptions) -> Vec<Edit<T>>
where
    T: Eq + Hash + Clone,
    S: DiffStrategy<T> + ?Sized,
{
    let raw = strategy.diff(old, new);
    let raw_count = raw.len();

    let edits = if options.reduce_moves { reduce(raw) } else { raw };
    debug_assert!(edits.len() <= raw_count, "reduction increased edit count");

    debug!(
        old_len = old.len(),
        new_len = new.len(),
        raw_edits = raw_count,
        edits = edits.len(),
        "computed diff"
    );
    edits
}
