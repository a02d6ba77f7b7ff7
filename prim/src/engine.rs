//! Sieve engine and algorithm dispatch
//!
//! [`Sieve`] owns the configuration and the optional error observer,
//! and routes each bound to the cheapest algorithm: Atkin below the
//! segment size, the segmented stream above it. The segmented path
//! obtains its small-prime basis by recursing through the same
//! dispatch, each call with its own stack-local state.

use prim_core::{bounds, PrimeSink, Result};

use crate::{
    atkin, eratosthenes, estimate,
    observer::ErrorObserver,
    segmented::PrimeStream,
    SieveConfig,
};

/// Prime sieve engine.
///
/// Cheap to construct; every call is single-threaded, synchronous, and
/// owns its working state exclusively, so one engine can serve any
/// number of sequential calls.
pub struct Sieve {
    config: SieveConfig,
    observer: Option<Box<dyn ErrorObserver>>,
}

impl Sieve {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SieveConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(config: SieveConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attach an error observer.
    ///
    /// Failing entry points report a human-readable message to the
    /// observer exactly once before returning the error.
    pub fn with_observer(mut self, observer: impl ErrorObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Materialize every prime in `[1, max]`, ascending.
    ///
    /// Bounds below the segment size go to Atkin directly; larger
    /// bounds collect the segmented stream into a buffer pre-sized by
    /// the prime-counting estimate.
    pub fn primes(&self, max: u64) -> Result<Vec<u64>> {
        let result = bounds::validate(max).and_then(|()| self.primes_inner(max));
        self.report(&result);
        result
    }

    /// Materialize every prime in `[1, max]` with the Sieve of Atkin.
    pub fn atkin(&self, max: u64) -> Result<Vec<u64>> {
        let result = bounds::validate(max).and_then(|()| atkin::sieve(max));
        self.report(&result);
        result
    }

    /// Materialize every prime in `[1, max]` with the odd-only Sieve of
    /// Eratosthenes.
    pub fn eratosthenes(&self, max: u64) -> Result<Vec<u64>> {
        let result = bounds::validate(max).and_then(|()| eratosthenes::sieve(max));
        self.report(&result);
        result
    }

    /// Stream every prime in `[1, max]` as a lazy iterator.
    ///
    /// All allocation happens here; the returned stream never fails and
    /// never allocates while iterating.
    pub fn stream(&self, max: u64) -> Result<PrimeStream> {
        let result = bounds::validate(max).and_then(|()| self.stream_inner(max));
        self.report(&result);
        result
    }

    /// Stream every prime in `[1, max]` into `sink`, ascending, one
    /// call per prime.
    pub fn stream_into<S: PrimeSink + ?Sized>(&self, max: u64, sink: &mut S) -> Result<()> {
        for prime in self.stream(max)? {
            sink.emit(prime);
        }
        Ok(())
    }

    /// Dispatch without bound validation or observer reporting; the
    /// recursive basis path comes through here so a single failure is
    /// reported once, at the public entry point.
    fn primes_inner(&self, max: u64) -> Result<Vec<u64>> {
        if max < self.config.segment_size() as u64 {
            return atkin::sieve(max);
        }

        let mut primes = estimate::alloc_buffer(estimate::primes_below(max))?;
        for prime in self.stream_inner(max)? {
            primes.push(prime);
        }
        Ok(primes)
    }

    fn stream_inner(&self, max: u64) -> Result<PrimeStream> {
        let limit = bounds::isqrt(max) + 1;
        // limit < max for every max the dispatch sends here, so the
        // recursion strictly shrinks and terminates in Atkin.
        let basis = self.primes_inner(limit)?;
        PrimeStream::new(max, self.config.segment_size(), basis)
    }

    fn report<T>(&self, result: &Result<T>) {
        if let (Err(err), Some(observer)) = (result, &self.observer) {
            observer.on_error(&err.to_string());
        }
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}
