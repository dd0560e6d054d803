//! Edit operation model
//!
//! An [`Edit`] is one atomic change needed to transform an origin sequence
//! into a destination sequence. [`EditIndex`] buckets edits by kind with
//! O(1) lookup and removal by value, which is what makes the move-reduction
//! pass ([`reduce`]) cheap: a delete and an insert of the same value are a
//! move-pair candidate, and pairing them is two hash lookups.
//!
//! # Index semantics
//!
//! - `Delete` carries an **origin** index (position in the old sequence).
//! - `Insert` and `Substitute` carry a **destination** index (position in
//!   the new sequence).
//! - `Move` carries both, as `from` (origin) and `to` (destination).

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::indexed_set::IndexedSet;

// =============================================================================
// Edit
// =============================================================================

/// A single edit operation over a sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit<T> {
    /// `value` is present at destination `index`, absent from the origin
    Insert { value: T, index: usize },
    /// `value` was present at origin `index`, absent from the destination
    Delete { value: T, index: usize },
    /// The element at destination `index` was replaced by `value`
    /// (produced by the dynamic-programming strategy only)
    Substitute { value: T, index: usize },
    /// `value` is present in both sequences but changed position
    Move { value: T, from: usize, to: usize },
}

/// Discriminant of an [`Edit`], for partitioning by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Insert,
    Delete,
    Substitute,
    Move,
}

impl<T> Edit<T> {
    /// The kind of this edit
    pub fn kind(&self) -> EditKind {
        match self {
            Self::Insert { .. } => EditKind::Insert,
            Self::Delete { .. } => EditKind::Delete,
            Self::Substitute { .. } => EditKind::Substitute,
            Self::Move { .. } => EditKind::Move,
        }
    }

    /// The value this edit refers to
    pub fn value(&self) -> &T {
        match self {
            Self::Insert { value, .. }
            | Self::Delete { value, .. }
            | Self::Substitute { value, .. }
            | Self::Move { value, .. } => value,
        }
    }

    /// Origin-side index, if this edit touches the old sequence
    pub fn origin_index(&self) -> Option<usize> {
        match self {
            Self::Delete { index, .. } => Some(*index),
            Self::Move { from, .. } => Some(*from),
            _ => None,
        }
    }

    /// Destination-side index, if this edit touches the new sequence
    pub fn destination_index(&self) -> Option<usize> {
        match self {
            Self::Insert { index, .. } | Self::Substitute { index, .. } => Some(*index),
            Self::Move { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Check if this is a Move operation
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }
}

// =============================================================================
// EditIndex
// =============================================================================

/// Edits bucketed by kind, keyed by value.
///
/// Each kind indexes its first edit per value, which is what the pairing
/// in [`reduce`](Self::reduce) looks up. Further edits for an already-seen
/// value (legitimate when the sequences contain duplicates) are kept aside
/// and pass through the reduction verbatim, so no recorded edit is ever
/// lost. Two edits of one kind at the same index are a defect in the
/// producing algorithm and trip a debug assertion.
///
/// Local to one diff invocation; callers own the reduced output outright.
#[derive(Debug, Clone)]
pub struct EditIndex<T>
where
    T: Eq + Hash + Clone,
{
    inserts: IndexedSet<usize, T>,
    deletes: IndexedSet<usize, T>,
    substitutions: IndexedSet<usize, T>,
    moves: FxHashMap<T, (usize, usize)>,
    overflow: Vec<Edit<T>>,
}

impl<T> EditIndex<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            inserts: IndexedSet::new(),
            deletes: IndexedSet::new(),
            substitutions: IndexedSet::new(),
            moves: FxHashMap::default(),
            overflow: Vec::new(),
        }
    }

    /// Total number of recorded edits across all buckets
    pub fn len(&self) -> usize {
        self.inserts.len()
            + self.deletes.len()
            + self.substitutions.len()
            + self.moves.len()
            + self.overflow.len()
    }

    /// Check if no edits are recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record an edit into the bucket for its kind.
    ///
    /// The first edit per (kind, value) lands in the indexed bucket; later
    /// ones for the same value go to the pass-through list. Two edits of
    /// one kind at the same index never come from a well-formed script.
    pub fn record(&mut self, edit: Edit<T>) {
        match edit {
            Edit::Insert { value, index } => {
                debug_assert!(
                    self.inserts.get(&index).is_none(),
                    "two insertions recorded at one destination index"
                );
                if self.inserts.contains_value(&value) {
                    self.overflow.push(Edit::Insert { value, index });
                } else {
                    self.inserts.insert(index, value);
                }
            }
            Edit::Delete { value, index } => {
                debug_assert!(
                    self.deletes.get(&index).is_none(),
                    "two deletions recorded at one origin index"
                );
                if self.deletes.contains_value(&value) {
                    self.overflow.push(Edit::Delete { value, index });
                } else {
                    self.deletes.insert(index, value);
                }
            }
            Edit::Substitute { value, index } => {
                debug_assert!(
                    self.substitutions.get(&index).is_none(),
                    "two substitutions recorded at one destination index"
                );
                if self.substitutions.contains_value(&value) {
                    self.overflow.push(Edit::Substitute { value, index });
                } else {
                    self.substitutions.insert(index, value);
                }
            }
            Edit::Move { value, from, to } => {
                if self.moves.contains_key(&value) {
                    self.overflow.push(Edit::Move { value, from, to });
                } else {
                    self.moves.insert(value, (from, to));
                }
            }
        }
    }

    /// Collapse matching insert/delete pairs into moves and flatten the
    /// buckets into an edit list.
    ///
    /// For every value present as both an indexed insertion and an indexed
    /// deletion, exactly one `Move` replaces the pair. The result never has
    /// more edits than were recorded, and its ordering is deterministic:
    /// deletions by origin index, insertions by destination index,
    /// substitutions by destination index, moves by destination index,
    /// then pass-through edits for colliding values in recording order.
    pub fn reduce(mut self) -> Vec<Edit<T>> {
        let mut moves: Vec<Edit<T>> = self
            .moves
            .drain()
            .map(|(value, (from, to))| Edit::Move { value, from, to })
            .collect();
        let mut inserts = Vec::new();

        for (to, value) in self.inserts.sorted_pairs() {
            match self.deletes.remove_value(&value) {
                Some(from) => {
                    trace!(from, to, "paired insert and delete into move");
                    moves.push(Edit::Move { value, from, to });
                }
                None => inserts.push(Edit::Insert { value, index: to }),
            }
        }

        let mut edits: Vec<Edit<T>> = self
            .deletes
            .sorted_pairs()
            .into_iter()
            .map(|(index, value)| Edit::Delete { value, index })
            .collect();
        edits.extend(inserts);
        edits.extend(
            self.substitutions
                .sorted_pairs()
                .into_iter()
                .map(|(index, value)| Edit::Substitute { value, index }),
        );
        moves.sort_by_key(|edit| edit.destination_index());
        edits.extend(moves);
        edits.extend(self.overflow);
        edits
    }
}

impl<T> Default for EditIndex<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Edit<T>> for EditIndex<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = Edit<T>>>(iter: I) -> Self {
        let mut index = Self::new();
        for edit in iter {
            index.record(edit);
        }
        index
    }
}

// =============================================================================
// Reduction pass
// =============================================================================

/// Merge matching insert/delete pairs for the same value into single `Move`
/// edits.
///
/// Applies uniformly to either strategy's raw output. Each value pairs at
/// most once; with duplicate values the remaining edits pass through
/// unchanged, so the reduced script applies to the same result as the raw
/// one.
///
/// # Example
///
/// ```
/// use seqdiff::{reduce, Edit};
///
/// let raw = vec![
///     Edit::Delete { value: 'a', index: 0 },
///     Edit::Insert { value: 'a', index: 2 },
/// ];
/// assert_eq!(reduce(raw), vec![Edit::Move { value: 'a', from: 0, to: 2 }]);
/// ```
pub fn reduce<T>(edits: Vec<Edit<T>>) -> Vec<Edit<T>>
where
    T: Eq + Hash + Clone,
{
    edits.into_iter().collect::<EditIndex<T>>().reduce()
}

// =============================================================================
// Tests
// =============================================================================
