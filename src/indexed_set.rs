//! Bidirectional index↔value mapping
//!
//! Maintains a strict one-to-one correspondence between positional indices
//! and values, queryable in O(1) from either side.
//!
//! # Invariant
//!
//! At all times the structure is a bijection: every index maps to exactly
//! one value and every value maps back to that index. `insert` enforces this
//! by first evicting any existing pair under either key.
//!
//! Built fresh for each diff invocation and discarded after; there is no
//! shared state and no interior mutability.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// One-to-one mapping between indices and values with O(1) lookup both ways.
///
/// # Example
///
/// ```
/// use seqdiff::IndexedSet;
///
/// let mut set = IndexedSet::new();
/// set.insert(0, "a");
/// set.insert(1, "b");
///
/// assert_eq!(set.get(&0), Some(&"a"));
/// assert_eq!(set.index_of(&"b"), Some(&1));
///
/// // Re-inserting under either key evicts the old pair
/// set.insert(0, "c");
/// assert_eq!(set.get(&0), Some(&"c"));
/// assert_eq!(set.index_of(&"a"), None);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedSet<I, V> {
    by_index: FxHashMap<I, V>,
    by_value: FxHashMap<V, I>,
}

impl<I, V> IndexedSet<I, V>
where
    I: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            by_index: FxHashMap::default(),
            by_value: FxHashMap::default(),
        }
    }

    /// Create an empty set with capacity for `n` pairs
    pub fn with_capacity(n: usize) -> Self {
        Self {
            by_index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            by_value: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Number of (index, value) pairs
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.by_index.len(), self.by_value.len());
        self.by_index.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Insert a pair, evicting any existing pair that shares either key.
    ///
    /// Always succeeds; there are no error conditions.
    pub fn insert(&mut self, index: I, value: V) {
        if let Some(old_value) = self.by_index.remove(&index) {
            self.by_value.remove(&old_value);
        }
        if let Some(old_index) = self.by_value.remove(&value) {
            self.by_index.remove(&old_index);
        }
        self.by_index.insert(index.clone(), value.clone());
        self.by_value.insert(value, index);
    }

    /// Look up the value stored at `index`
    pub fn get(&self, index: &I) -> Option<&V> {
        self.by_index.get(index)
    }

    /// Look up the index holding `value`
    pub fn index_of(&self, value: &V) -> Option<&I> {
        self.by_value.get(value)
    }

    /// Check whether `value` is present
    pub fn contains_value(&self, value: &V) -> bool {
        self.by_value.contains_key(value)
    }

    /// Remove the pair containing `value`, returning its index
    pub fn remove_value(&mut self, value: &V) -> Option<I> {
        let index = self.by_value.remove(value)?;
        let evicted = self.by_index.remove(&index);
        debug_assert!(evicted.is_some(), "bijection lost an index entry");
        Some(index)
    }

    /// Remove the pair stored at `index`, returning its value
    pub fn remove_at(&mut self, index: &I) -> Option<V> {
        let value = self.by_index.remove(index)?;
        let evicted = self.by_value.remove(&value);
        debug_assert!(evicted.is_some(), "bijection lost a value entry");
        Some(value)
    }

    /// Iterate over (index, value) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&I, &V)> {
        self.by_index.iter()
    }
}

impl<I, V> IndexedSet<I, V>
where
    I: Eq + Hash + Clone + Ord,
    V: Eq + Hash + Clone,
{
    /// Collect (index, value) pairs sorted by index.
    ///
    /// Only available when the index type is ordered.
    pub fn sorted_pairs(&self) -> Vec<(I, V)> {
        let mut pairs: Vec<(I, V)> = self
            .by_index
            .iter()
            .map(|(i, v)| (i.clone(), v.clone()))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}

impl<I, V> Default for IndexedSet<I, V>
where
    I: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, V> FromIterator<(I, V)> for IndexedSet<I, V>
where
    I: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for (index, value) in iter {
            set.insert(index, value);
        }
        set
    }
}
