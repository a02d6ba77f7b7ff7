//! prim - Prime Sieve Engine
//!
//! This library computes the primes in `[1, max]` with three
//! interoperating sieves: a mod-60 Sieve of Atkin for small bounds, an
//! odd-only Sieve of Eratosthenes, and a segmented Sieve of
//! Eratosthenes that streams primes in O(sqrt(max)) memory by sieving
//! fixed-size windows. The segmented sieve bootstraps its small-prime
//! basis by recursing through the same dispatch that callers use.
//!
//! ## Architecture
//!
//! The workspace follows a clean specification/implementation
//! separation:
//!
//! - **prim-core**: packed bit storage, bound arithmetic, wheel tables,
//!   and the streaming trait (no I/O)
//! - **prim**: the sieve algorithms, the dispatch engine, and the
//!   streaming iterator
//!
//! ## Quick Start
//!
//! ```rust
//! use prim::Sieve;
//!
//! fn example() -> prim::Result<()> {
//!     let sieve = Sieve::new();
//!
//!     // Materialize every prime up to a bound
//!     let primes = sieve.primes(1_000)?;
//!     assert_eq!(primes.len(), 168);
//!
//!     // Or stream them without materializing the result
//!     for p in sieve.stream(10)? {
//!         println!("{p}");
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Bounded memory**: the segmented path holds one window bitset and
//!   the basis primes, independent of `max`
//! - **Pull or push streaming**: [`PrimeStream`] for iteration,
//!   [`PrimeSink`] for callback-style delivery
//! - **Injected diagnostics**: an [`ErrorObserver`] per engine instead
//!   of process-global state
//! - **Fallible allocation**: every buffer is acquired through
//!   `try_reserve`, surfacing [`PrimError::AllocationFailed`] instead
//!   of aborting

// Re-export core definitions
pub use prim_core::{BitSet, PrimError, PrimeSink, Result, MAX_SIEVE_BOUND};

// Implementation modules
pub mod config;
pub mod engine;
pub mod estimate;
pub mod observer;
pub mod segmented;

mod atkin;
mod eratosthenes;

// Public exports
pub use config::SieveConfig;
pub use engine::Sieve;
pub use observer::ErrorObserver;
pub use segmented::PrimeStream;

/// Materialize every prime in `[1, max]`, dispatching to the cheapest
/// algorithm for the bound. Convenience wrapper over a default
/// [`Sieve`].
pub fn prime_sieve(max: u64) -> Result<Vec<u64>> {
    Sieve::new().primes(max)
}

/// Materialize every prime in `[1, max]` with the Sieve of Atkin.
pub fn atkin_sieve(max: u64) -> Result<Vec<u64>> {
    Sieve::new().atkin(max)
}

/// Materialize every prime in `[1, max]` with the odd-only Sieve of
/// Eratosthenes.
pub fn eratosthenes_sieve(max: u64) -> Result<Vec<u64>> {
    Sieve::new().eratosthenes(max)
}

/// Stream every prime in `[1, max]` to `consumer` in ascending order
/// using the segmented sieve.
pub fn segmented_sieve<F: FnMut(u64)>(max: u64, mut consumer: F) -> Result<()> {
    Sieve::new().stream_into(max, &mut consumer)
}
