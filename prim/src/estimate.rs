//! Result-buffer sizing for sieve outputs
//!
//! Materializing paths pre-size their buffers with the classical
//! prime-counting upper bound so a successful sieve never reallocates
//! mid-collection.

use prim_core::{PrimError, Result};

/// Upper bound on the number of primes at most `n`.
///
/// `ceil(1.25506 * n / ln n)`, which dominates `pi(n)` for every
/// `n >= 2`. Returns 0 for `n < 2`.
pub fn primes_below(n: u64) -> usize {
    if n < 2 {
        return 0;
    }
    let nf = n as f64;
    (1.25506 * nf / nf.ln()).ceil() as usize
}

/// Acquire an empty prime buffer with room for `capacity` entries.
///
/// Allocation failure surfaces as [`PrimError::AllocationFailed`]; the
/// buffer is never partially constructed.
pub(crate) fn alloc_buffer(capacity: usize) -> Result<Vec<u64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| PrimError::AllocationFailed {
            bytes: capacity.saturating_mul(core::mem::size_of::<u64>()),
        })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_below_two() {
        assert_eq!(primes_below(0), 0);
        assert_eq!(primes_below(1), 0);
    }

    #[test]
    fn test_dominates_known_counts() {
        // (n, pi(n))
        for (n, count) in [
            (10u64, 4usize),
            (100, 25),
            (1_000, 168),
            (65_536, 6_542),
            (1_000_000, 78_498),
            (10_000_000, 664_579),
        ] {
            let estimate = primes_below(n);
            assert!(estimate >= count, "estimate {estimate} below pi({n}) = {count}");
            // Stays within ~26% of the true count, so buffers are not
            // wildly oversized either.
            assert!(estimate <= count + count / 3 + 4, "estimate {estimate} loose for n = {n}");
        }
    }

    #[test]
    fn test_alloc_buffer_empty_with_capacity() {
        let buf = alloc_buffer(1_024).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 1_024);
    }
}
