//! Prelude module for common imports.
//!
//! ```
//! use seqdiff::prelude::*;
//! ```

// Edit model
pub use crate::edit::{Edit, EditIndex, EditKind, reduce};

// Strategies
pub use crate::algo::{DiffStrategy, PositionalDiff, WagnerFischerDiff};

// Entry points
pub use crate::diff::{DiffOptions, diff, diff_with};

// Application
pub use crate::apply::apply;

// Data structures
pub use crate::indexed_set::IndexedSet;

// Error
pub use crate::error::{ApplyError, ApplyResult};
