//! Error types for seqdiff.
//!
//! The diff core itself has no recoverable errors: every pair of input
//! collections produces a defined edit script, and internal invariant
//! violations are programmer errors caught by debug assertions. Errors only
//! arise when applying an edit script to a sequence it does not fit.

use thiserror::Error;

/// Errors from applying an edit script to a sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// An edit referenced an index outside the sequence
    #[error("edit index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Index carried by the offending edit
        index: usize,
        /// Sequence length at the point the edit was applied
        len: usize,
    },

    /// A deletion's recorded value did not match the element at its index
    #[error("value mismatch at origin index {index}")]
    ValueMismatch {
        /// Origin index carried by the offending deletion
        index: usize,
    },
}

/// Result type alias for edit-script application.
pub type ApplyResult<T> = Result<T, ApplyError>;
