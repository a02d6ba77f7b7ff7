//! Engine configuration

/// Default window span for the segmented sieve, in integers.
pub const DEFAULT_SEGMENT_SIZE: usize = 65_536;

/// Smallest accepted window span.
const MIN_SEGMENT_SIZE: usize = 16;

/// Configuration for a [`Sieve`](crate::Sieve) engine.
///
/// The segment size is the window span of the segmented sieve and also
/// the dispatch threshold: bounds below it go straight to Atkin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SieveConfig {
    segment_size: usize,
}

impl SieveConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
        }
    }

    /// Set the segment window span.
    ///
    /// The span is clamped to at least 16 and rounded down to an even
    /// value; offset carry across windows relies on window bases
    /// keeping the same parity.
    pub fn with_segment_size(mut self, segment_size: usize) -> Self {
        self.segment_size = segment_size.max(MIN_SEGMENT_SIZE) & !1;
        self
    }

    /// Get the segment window span in integers.
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Peak window bitset footprint in bytes.
    pub fn segment_bytes(&self) -> usize {
        (self.segment_size - 1) / 8 + 1
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self::new()
    }
}
