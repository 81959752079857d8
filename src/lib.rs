//! Best-effort extraction of the `exp` claim from unverified JWT strings.
//!
//! This crate does one thing: given a compact JWT (three dot-separated
//! Base64URL segments), it decodes the payload segment and returns the
//! `exp` claim as an absolute UTC timestamp. It is not a JWT library —
//! no signature verification, no claim validation, no issuance. It is
//! the decoding half of a per-request "when does this token expire?"
//! check, built to be total over arbitrary input and cheap on the hot
//! path:
//!
//! - every malformed-input shape resolves to `None`, never an error;
//! - segment isolation is zero-copy (`&str` spans over the input);
//! - the Base64URL decode lands in a pooled scratch buffer and the JSON
//!   parse reads that buffer's bytes directly.
//!
//! ```
//! use jwt_expiry::extract_expiration;
//!
//! // header `{"alg":"none"}` . payload `{"exp":1999999999}` . signature
//! let token = "eyJhbGciOiJub25lIn0.eyJleHAiOjE5OTk5OTk5OTl9.sig";
//! let expiry = extract_expiration(token).unwrap();
//! assert_eq!(expiry.timestamp(), 1_999_999_999);
//! ```

mod buffer;
mod diagnostics;
mod error;
mod extract;

pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use extract::{ExpirationExtractor, extract_expiration};
