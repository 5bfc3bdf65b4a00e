use thiserror::Error;

/// Everything that can go wrong while working on a workshop layout.
///
/// All variants are recoverable: the operation that produced them leaves the workshop state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkshopError {
    /// A base or cut configuration is malformed
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The scanner exhausted the grid without finding a free slot
    #[error("not enough free space on the base for a {width} x {height} cm cut")]
    NoSpace {
        /// Width of the rejected cut (cm)
        width: f64,
        /// Height of the rejected cut (cm)
        height: f64,
    },

    /// The operation is not allowed in the current state of the workshop
    #[error("{0}")]
    Precondition(&'static str),

    /// No progress has been saved under the snapshot key
    #[error("no saved progress found")]
    SnapshotNotFound,

    /// The saved progress could not be read back
    #[error("failed to load saved progress: {reason}")]
    SnapshotCorrupt {
        /// Why the snapshot was rejected
        reason: String,
    },

    /// The key-value store failed to read or write
    #[error("storage failure: {0}")]
    Store(String),
}

impl WorkshopError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        WorkshopError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn corrupt(reason: impl Into<String>) -> Self {
        WorkshopError::SnapshotCorrupt {
            reason: reason.into(),
        }
    }
}
