//! Error types for sieve operations

/// Errors that can occur during a sieve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimError {
    /// Memory for a sieve buffer could not be acquired
    AllocationFailed {
        /// Size of the refused allocation
        bytes: usize,
    },
    /// The requested bound exceeds the supported sieve range
    BoundTooLarge {
        /// The rejected bound
        max: u64,
    },
}

impl core::fmt::Display for PrimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PrimError::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {bytes} bytes")
            }
            PrimError::BoundTooLarge { max } => {
                write!(f, "bound {max} exceeds the supported sieve range")
            }
        }
    }
}

/// Result type for sieve operations
pub type Result<T> = core::result::Result<T, PrimError>;
