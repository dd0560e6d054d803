//! seqdiff - List diffing with typed edit operations
//!
//! Given an old and a new ordered collection of hashable elements, compute
//! the insert/delete/substitute/move operations transforming one into the
//! other, in a form an incremental consumer (a UI batch updater, an ordered
//! cache, ...) can apply.
//!
//! ## Strategies
//!
//! Two algorithms implement the [`DiffStrategy`] capability:
//!
//! - [`PositionalDiff`]: single pass over the union of values, with
//!   position-adjustment counting; roughly O(n + m). Requires unique
//!   elements per collection.
//! - [`WagnerFischerDiff`]: classic O(n·m) edit-distance matrix (row by
//!   row), producing minimal scripts including `Substitute` edits; tolerates
//!   duplicates.
//!
//! A shared reduction pass ([`reduce`]) collapses a delete and an insert of
//! the same value into a single `Move`, for either strategy's output.
//!
//! ## Modules
//! - `edit`: `Edit` operations, `EditIndex` buckets, move reduction
//! - `algo`: the two diff strategies behind `DiffStrategy`
//! - `diff`: top-level `diff` / `diff_with` entry points
//! - `apply`: edit-script application (the consumer contract, testable)
//! - `indexed_set`: bidirectional index↔value mapping
//!
//! ## Usage
//!
//! ```
//! use seqdiff::{diff, diff_with, apply, DiffOptions, Edit, WagnerFischerDiff};
//!
//! let old = vec!["mon", "tue", "wed"];
//! let new = vec!["wed", "mon", "tue"];
//!
//! // Default: positional strategy, insert/delete pairs reduced to moves
//! let edits = diff(&old, &new);
//! assert!(edits.iter().all(Edit::is_move));
//! assert_eq!(apply(&old, &edits).unwrap(), new);
//!
//! // Explicit strategy selection
//! let edits = diff_with(&old, &new, &WagnerFischerDiff, DiffOptions::raw());
//! assert_eq!(apply(&old, &edits).unwrap(), new);
//! ```
//!
//! ## Limitations
//!
//! The positional strategy assumes values are unique within each
//! collection; with duplicates its output is undefined (the
//! Wagner–Fischer strategy still produces a valid script, without stable
//! identity for the duplicates). Both strategies run synchronously with no
//! cancellation; the O(n·m) strategy is sized for UI lists, not bulk text.

// =============================================================================
// Core modules
// =============================================================================

/// Edit operations, per-kind buckets, move reduction
pub mod edit;

/// Diff strategies: positional and Wagner–Fischer
pub mod algo;

/// Top-level diff entry points
pub mod diff;

/// Edit-script application
pub mod apply;

/// Bidirectional index↔value mapping
pub mod indexed_set;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Edit model
pub use edit::{Edit, EditIndex, EditKind, reduce};

// Strategies
pub use algo::{DiffStrategy, PositionalDiff, WagnerFischerDiff};

// Entry points
pub use diff::{DiffOptions, diff, diff_with};

// Application
pub use apply::apply;

// Data structures
pub use indexed_set::IndexedSet;

// Error types
pub use error::{ApplyError, ApplyResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Edit<u64>: Send, Sync, Clone);
    assert_impl_all!(EditIndex<u64>: Send, Sync, Clone);
    assert_impl_all!(IndexedSet<usize, u64>: Send, Sync, Clone);

    #[test]
    fn test_public_surface_round_trip() {
        let old = vec!["alpha", "beta", "gamma", "delta"];
        let new = vec!["delta", "beta", "epsilon"];

        let edits = diff(&old, &new);
        assert_eq!(apply(&old, &edits).unwrap(), new);
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;

        let edits: Vec<Edit<u8>> = diff(&[1, 2], &[2, 1]);
        assert!(!edits.is_empty());
    }
}
