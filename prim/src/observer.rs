//! Failure diagnostics delivered to an injected observer
//!
//! The engine never logs or prints on its own. A caller that wants
//! visibility into resource failures attaches an observer to its
//! [`Sieve`](crate::Sieve); each failing entry point reports a
//! human-readable message exactly once before returning the error.

/// Receives a diagnostic message when a sieve entry point fails.
///
/// Observers are per-engine, so concurrent engines (and tests) never
/// interfere with one another. An observer is configured before the
/// engine is used and treated as read-only thereafter; the
/// `Send + Sync` bound is what makes sharing an engine across threads
/// sound.
pub trait ErrorObserver: Send + Sync {
    /// Handle one failure report.
    fn on_error(&self, message: &str);
}

impl<F> ErrorObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_error(&self, message: &str) {
        self(message)
    }
}
