//! Expiration extraction from compact JWT strings.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::any::Any;
use std::panic;

use crate::buffer;
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::PayloadError;

/// Payload fields read during extraction. Everything else is skipped.
#[derive(Deserialize)]
struct PayloadClaims {
    exp: Option<serde_json::Number>,
}

/// Reads the `exp` claim out of a compact JWT without verifying it.
///
/// The extractor never validates the signature, never inspects the
/// header or signature segments, and never judges whether the token is
/// still live. It answers one question: what expiration instant, if
/// any, does this token carry?
///
/// Every malformed-input shape (missing delimiters, bad Base64URL,
/// invalid JSON, missing or non-integer `exp`) yields `None` silently.
/// Only failures the pipeline did not anticipate reach the diagnostic
/// sink, and the call still returns `None` — no error ever escapes to
/// the caller.
///
/// # Examples
///
/// ```
/// use jwt_expiry::ExpirationExtractor;
///
/// let extractor = ExpirationExtractor::new();
/// assert!(extractor.extract("not a token").is_none());
/// ```
pub struct ExpirationExtractor<S = NoopSink> {
    sink: S,
}

impl ExpirationExtractor<NoopSink> {
    /// Create an extractor that discards diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self { sink: NoopSink }
    }
}

impl Default for ExpirationExtractor<NoopSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> ExpirationExtractor<S> {
    /// Create an extractor that reports unexpected failures to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Extract the `exp` claim as an absolute UTC timestamp.
    ///
    /// Returns `None` for every malformed or claim-less token; the
    /// caller cannot distinguish "token malformed" from "claim
    /// missing", and that is deliberate. A timestamp in the past is
    /// returned as-is — liveness is the caller's concern.
    pub fn extract(&self, token: &str) -> Option<DateTime<Utc>> {
        // Absent or blank tokens are an expected condition (e.g. an
        // unauthenticated request), not worth a decode attempt.
        if token.chars().all(char::is_whitespace) {
            return None;
        }
        let payload = payload_segment(token)?;
        match panic::catch_unwind(|| decode_expiration(payload)) {
            Ok(Ok(expiry)) => expiry,
            // Routine malformed payload. Silent by contract.
            Ok(Err(_)) => None,
            Err(cause) => {
                self.sink
                    .unexpected_error("jwt expiration extraction", &panic_message(&cause));
                None
            }
        }
    }
}

/// Isolate the payload span between the first two `.` delimiters.
///
/// The header span must be non-empty; the signature span is never
/// inspected, so an empty or garbage signature passes through.
fn payload_segment(token: &str) -> Option<&str> {
    let first = token.find('.')?;
    if first == 0 {
        return None;
    }
    let rest = &token[first + 1..];
    let second = rest.find('.')?;
    if second == 0 {
        return None;
    }
    Some(&rest[..second])
}

/// Decode the payload span and read its `exp` claim.
///
/// `Ok(None)` means the payload parsed but carries no usable integer
/// `exp`; `Err` means the span is not a decodable claims payload.
fn decode_expiration(payload: &str) -> Result<Option<DateTime<Utc>>, PayloadError> {
    let mut scratch = buffer::acquire(base64::decoded_len_estimate(payload.len()));
    let written = URL_SAFE_NO_PAD.decode_slice(payload, scratch.as_mut_slice())?;
    let claims: PayloadClaims = serde_json::from_slice(&scratch.as_slice()[..written])?;
    let Some(exp) = claims.exp else {
        return Ok(None);
    };
    // exp is integer Unix seconds by convention; fractional or
    // oversized numbers are invalid rather than truncated.
    let Some(seconds) = exp.as_i64() else {
        return Ok(None);
    };
    Ok(DateTime::<Utc>::from_timestamp(seconds, 0))
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(msg) = cause.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = cause.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Extract the `exp` claim from `token`, discarding diagnostics.
///
/// Convenience wrapper over [`ExpirationExtractor::new`] for callers
/// without a sink to wire up.
#[must_use]
pub fn extract_expiration(token: &str) -> Option<DateTime<Utc>> {
    ExpirationExtractor::new().extract(token)
}
