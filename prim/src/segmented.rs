//! Segmented Sieve of Eratosthenes
//!
//! Streams the primes in `[1, max]` while holding only one window
//! bitset and the small-prime basis, so peak memory is O(sqrt(max))
//! regardless of the bound. Each basis prime carries an offset: the
//! position of its next unmarked multiple relative to the current
//! window. Offsets advance across window boundaries; that carry is the
//! one piece of mutable state the whole stream depends on.
//!
//! Every allocation happens during construction. Iteration itself never
//! allocates, so a resource failure surfaces as an `Err` before the
//! first prime is yielded and a stream that exists always runs to
//! completion.

use prim_core::{BitSet, PrimError, Result};

/// A basis prime currently marking composites, with the window-relative
/// offset of its next multiple.
struct ActivePrime {
    prime: u64,
    offset: u64,
}

/// Lazy, forward-only stream of the primes in `[1, max]`, ascending.
///
/// Created by [`Sieve::stream`](crate::Sieve::stream). Yields each
/// prime exactly once; the window advances on demand as iteration
/// crosses segment boundaries.
pub struct PrimeStream {
    max: u64,
    segment_size: u64,
    /// Ascending primes up to `isqrt(max) + 1`, consumed read-only.
    basis: Vec<u64>,
    /// Basis primes at `..next_basis` have been activated.
    next_basis: usize,
    active: Vec<ActivePrime>,
    window: BitSet,
    window_base: u64,
    window_high: u64,
    candidate: u64,
    yielded_two: bool,
}

impl PrimeStream {
    /// Build a stream over `[1, max]` from an already-computed basis.
    ///
    /// `basis` must hold every prime up to `isqrt(max) + 1`, ascending.
    pub(crate) fn new(max: u64, segment_size: usize, basis: Vec<u64>) -> Result<Self> {
        let mut active = Vec::new();
        active
            .try_reserve_exact(basis.len())
            .map_err(|_| PrimError::AllocationFailed {
                bytes: basis.len().saturating_mul(core::mem::size_of::<ActivePrime>()),
            })?;

        let mut stream = Self {
            max,
            segment_size: segment_size as u64,
            basis,
            next_basis: 0,
            active,
            window: BitSet::new(segment_size - 1)?,
            window_base: 0,
            window_high: 0,
            candidate: 3,
            yielded_two: false,
        };
        if stream.max >= 3 {
            stream.prepare_window(0);
        }
        Ok(stream)
    }

    /// Sieve the window starting at `base`: refill the bitset, activate
    /// newly eligible basis primes, and strike every active prime's
    /// multiples, carrying the leftover offsets into the next window.
    fn prepare_window(&mut self, base: u64) {
        self.window_base = base;
        self.window_high = (base + self.segment_size - 1).min(self.max);
        self.window.fill(true);

        // A basis prime joins once its square is inside the window;
        // until then no multiple of it in range lacks a smaller factor.
        while self.next_basis < self.basis.len() {
            let p = self.basis[self.next_basis];
            if p * p > self.window_high {
                break;
            }
            self.next_basis += 1;
            if p == 2 {
                // Even candidates are never scanned
                continue;
            }
            // Capacity was reserved for the whole basis up front
            self.active.push(ActivePrime {
                prime: p,
                offset: p * p - base,
            });
        }

        for entry in &mut self.active {
            let step = entry.prime * 2;
            let mut j = entry.offset;
            while j < self.segment_size {
                self.window.set(j as usize, false);
                j += step;
            }
            entry.offset = j - self.segment_size;
        }
    }
}

impl Iterator for PrimeStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.yielded_two {
            self.yielded_two = true;
            if self.max >= 2 {
                return Some(2);
            }
        }

        while self.candidate <= self.max {
            if self.candidate > self.window_high {
                let next_base = self.window_base + self.segment_size;
                self.prepare_window(next_base);
                continue;
            }

            let n = self.candidate;
            self.candidate += 2;
            if self.window.get((n - self.window_base) as usize) {
                return Some(n);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Sieve;

    #[test]
    fn test_empty_below_two() {
        let sieve = Sieve::new();
        assert_eq!(sieve.stream(0).unwrap().count(), 0);
        assert_eq!(sieve.stream(1).unwrap().count(), 0);
    }

    #[test]
    fn test_literal_results() {
        let sieve = Sieve::new();
        assert_eq!(sieve.stream(2).unwrap().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sieve.stream(3).unwrap().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(sieve.stream(5).unwrap().collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(
            sieve.stream(10).unwrap().collect::<Vec<_>>(),
            vec![2, 3, 5, 7]
        );
    }

    #[test]
    fn test_ascending_across_windows() {
        let sieve = Sieve::new();
        let mut last = 0;
        for p in sieve.stream(200_000).unwrap() {
            assert!(p > last, "{p} out of order after {last}");
            last = p;
        }
        assert_eq!(last, 199_999);
    }

    #[test]
    fn test_stream_is_lazy_to_construct() {
        // Constructing a stream over a large range only costs the basis
        let sieve = Sieve::new();
        let mut stream = sieve.stream(100_000_000).unwrap();
        assert_eq!(stream.next(), Some(2));
        assert_eq!(stream.next(), Some(3));
    }
}
