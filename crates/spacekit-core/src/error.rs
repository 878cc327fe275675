//! Error handling for SpaceKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Layout errors (malformed or inconsistent persisted layouts)
//! - I/O and JSON errors surfaced while saving or loading
//!
//! Missing preconditions (rotating with nothing selected, undo at the start
//! of history) are not errors; those operations are silent no-ops.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents a persisted layout that could not be accepted. A load that
/// fails with one of these leaves the current scene untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The text is not a list of entity records
    #[error("Malformed layout: {reason}")]
    Malformed {
        /// The parser's description of the problem.
        reason: String,
    },

    /// A record has a value outside its allowed domain
    #[error("Invalid record {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the list.
        index: usize,
        /// Why the record was rejected.
        reason: String,
    },

    /// Two records share the same id
    #[error("Duplicate entity id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

/// Main error type for SpaceKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
