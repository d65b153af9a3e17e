//! Error types for multi-index store operations
//!
//! Every failure a store operation can produce is a variant of [`StoreError`].
//! Absence of a key is never an error: lookups report it through `Option`.
//!
//! ## Error Codes
//!
//! | Code | Raised by |
//! |------|-----------|
//! | DuplicateIndexName | construction |
//! | ArityMismatch | set |
//! | SecondaryKeyConflict | set |
//! | UnknownIndexName | any operation addressed by index name |

use thiserror::Error;

/// Error returned by multi-index store operations.
///
/// Generic over the primary key (`PK`), secondary index name (`N`) and
/// secondary key (`SK`) types so callers can match on the exact values
/// involved in a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError<PK, N, SK> {
    /// The same secondary index name was configured twice
    #[error("secondary index name {name:?} is not unique")]
    DuplicateIndexName {
        /// First name found to repeat
        name: N,
    },

    /// Number of supplied secondary key values differs from the configured index count
    #[error(
        "number of secondary keys does not match number of secondary indexes: expected {expected}, actual {actual}"
    )]
    ArityMismatch {
        /// Configured index count
        expected: usize,
        /// Supplied key count
        actual: usize,
    },

    /// A secondary key value is already owned by a different primary key
    #[error("secondary key {key:?} in index {index:?} already belongs to primary key {existing:?}, cannot assign to {new:?}")]
    SecondaryKeyConflict {
        /// Index in which the conflict occurred
        index: N,
        /// Primary key currently owning the value
        existing: PK,
        /// Primary key the caller tried to set
        new: PK,
        /// Conflicting secondary key value
        key: SK,
    },

    /// The addressed secondary index does not exist
    #[error("unknown secondary index name {name:?}")]
    UnknownIndexName {
        /// Name that was not configured
        name: N,
    },
}

/// Result type for multi-index store operations
pub type Result<T, PK, N, SK> = std::result::Result<T, StoreError<PK, N, SK>>;

impl<PK, N, SK> StoreError<PK, N, SK> {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::DuplicateIndexName { .. } => "DuplicateIndexName",
            StoreError::ArityMismatch { .. } => "ArityMismatch",
            StoreError::SecondaryKeyConflict { .. } => "SecondaryKeyConflict",
            StoreError::UnknownIndexName { .. } => "UnknownIndexName",
        }
    }

    /// Check if this is a secondary key conflict.
    ///
    /// Conflicts may succeed on retry once the owning record is removed.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::SecondaryKeyConflict { .. })
    }

    /// Check if this error names an index that is not configured.
    pub fn is_unknown_index(&self) -> bool {
        matches!(self, StoreError::UnknownIndexName { .. })
    }

    /// Check if the request itself was malformed (wrong arity or index name).
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            StoreError::ArityMismatch { .. } | StoreError::UnknownIndexName { .. }
        )
    }
}
