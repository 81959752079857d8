//! Diagnostic sink for unexpected processing failures.
//!
//! Malformed tokens are a routine input shape and are never reported.
//! The sink only hears about failures the extraction pipeline did not
//! anticipate, at most once per call.

use std::fmt::Display;

/// Receiver for unexpected failures during token processing.
///
/// Injected into [`ExpirationExtractor`](crate::ExpirationExtractor)
/// rather than read from global state, so the core stays pure and
/// independently testable.
pub trait DiagnosticSink {
    /// Report a failure that is not a routine malformed-token condition.
    fn unexpected_error(&self, context: &str, error: &dyn Display);
}

/// Sink that discards every report. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn unexpected_error(&self, _context: &str, _error: &dyn Display) {}
}

/// Sink that forwards reports to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unexpected_error(&self, context: &str, error: &dyn Display) {
        tracing::error!(context, error = %error, "unexpected failure while extracting token expiry");
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn unexpected_error(&self, context: &str, error: &dyn Display) {
        (**self).unexpected_error(context, error);
    }
}
