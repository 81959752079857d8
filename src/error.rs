//! Internal decode-failure taxonomy.

use thiserror::Error;

/// Ways a payload segment can fail to produce an expiration claim.
///
/// These cover the routine shapes of malformed tokens. None of them
/// escapes the crate: the public API collapses every variant to an
/// absent result without reporting anything.
#[derive(Debug, Error)]
pub(crate) enum PayloadError {
    /// Payload span is not valid Base64URL, or overflows the scratch buffer.
    #[error("invalid Base64URL payload: {0}")]
    Base64(#[from] base64::DecodeSliceError),

    /// Decoded bytes are not a JSON object with the expected claim shape.
    #[error("payload is not valid claims JSON: {0}")]
    Json(#[from] serde_json::Error),
}
