//! Sieve of Atkin
//!
//! Quadratic-form wheel with modulus 60. A candidate is flipped once
//! for every `(x, y)` solution of the form whose residue class admits
//! it, so it survives only when the solution count is odd; square-free
//! filtering then removes the remaining composites. The wheel cannot
//! see 2, 3, or 5, so those are prepended.

use prim_core::{wheel, BitSet, Result};

use crate::estimate;

/// All primes in `[1, max]`, ascending.
pub(crate) fn sieve(max: u64) -> Result<Vec<u64>> {
    let mut primes = estimate::alloc_buffer(capacity_for(max))?;
    for &p in wheel::WHEEL_PRIMES.iter() {
        if p <= max {
            primes.push(p);
        }
    }
    if max < 6 {
        return Ok(primes);
    }

    let limit = prim_core::isqrt(max) + 1;
    let mut marks = BitSet::new(max as usize)?;

    for x in 1..=limit {
        for y in 1..=limit {
            let n = 4 * x * x + y * y;
            if n <= max && wheel::admissible(wheel::FORM_4XX_PLUS_YY, n) {
                marks.flip(n as usize);
            }

            let n = 3 * x * x + y * y;
            if n <= max && wheel::admissible(wheel::FORM_3XX_PLUS_YY, n) {
                marks.flip(n as usize);
            }

            if x <= y {
                continue;
            }

            let n = 3 * x * x - y * y;
            if n <= max && wheel::admissible(wheel::FORM_3XX_MINUS_YY, n) {
                marks.flip(n as usize);
            }
        }
    }

    // Squares of survivors and their multiples are composite
    for i in 7..=limit {
        if marks.get(i as usize) {
            let square = i * i;
            let mut k = square;
            while k <= max {
                marks.set(k as usize, false);
                k += square;
            }
        }
    }

    for n in 7..=max {
        if marks.get(n as usize) {
            primes.push(n);
        }
    }

    Ok(primes)
}

/// Exact result sizes for the trivial bounds, the prime-counting
/// estimate beyond them.
fn capacity_for(max: u64) -> usize {
    match max {
        0 | 1 => 0,
        2 => 1,
        3 | 4 => 2,
        5 => 3,
        _ => estimate::primes_below(max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_below_two() {
        assert_eq!(sieve(0).unwrap(), Vec::<u64>::new());
        assert_eq!(sieve(1).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_literal_results() {
        assert_eq!(sieve(2).unwrap(), vec![2]);
        assert_eq!(sieve(3).unwrap(), vec![2, 3]);
        assert_eq!(sieve(4).unwrap(), vec![2, 3]);
        assert_eq!(sieve(5).unwrap(), vec![2, 3, 5]);
        assert_eq!(sieve(6).unwrap(), vec![2, 3, 5]);
        assert_eq!(sieve(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(
            sieve(60).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(sieve(100).unwrap().len(), 25);
        assert_eq!(sieve(1_000).unwrap().len(), 168);
        assert_eq!(sieve(65_535).unwrap().len(), 6_542);
        assert_eq!(sieve(1_000_000).unwrap().len(), 78_498);
    }

    #[test]
    fn test_includes_wheel_boundary_primes() {
        // 61 is the first wheel-discovered prime past one full turn
        let primes = sieve(61).unwrap();
        assert_eq!(*primes.last().unwrap(), 61);
    }
}
