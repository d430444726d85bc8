//! Sequence-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during sequence operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// Backing storage could not be obtained or grown: the allocator
    /// refused the reservation, or growth would exceed the configured
    /// ceiling.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
        /// Number of element slots available without growing.
        capacity: usize,
    },
    /// Removal attempted on a sequence with zero live elements.
    Empty,
    /// Read attempted at or beyond the live element count.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The live element count at the time of the access.
        len: usize,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "allocation failed: requested {requested} slots, capacity {capacity} slots"
                )
            }
            Self::Empty => write!(f, "sequence is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds: len is {len}")
            }
        }
    }
}

impl Error for SeqError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_kinds() {
        let alloc = SeqError::AllocationFailed {
            requested: 9,
            capacity: 8,
        };
        let oob = SeqError::IndexOutOfBounds { index: 3, len: 3 };
        assert_eq!(
            alloc.to_string(),
            "allocation failed: requested 9 slots, capacity 8 slots"
        );
        assert_eq!(SeqError::Empty.to_string(), "sequence is empty");
        assert_eq!(oob.to_string(), "index 3 out of bounds: len is 3");
    }
}
