//! Property tests: totality, purity, and exact round-tripping.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jwt_expiry::extract_expiration;
use proptest::prelude::*;

fn token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{payload}.signature")
}

proptest! {
    // Any string at all is an acceptable input; the worst outcome is None.
    #[test]
    fn extraction_is_total_over_arbitrary_strings(input in ".*") {
        let _ = extract_expiration(&input);
    }

    #[test]
    fn extraction_is_idempotent(input in ".*") {
        prop_assert_eq!(extract_expiration(&input), extract_expiration(&input));
    }

    // Stay comfortably inside chrono's calendar range (roughly year
    // ±262,000); the conversion must be second-exact across it.
    #[test]
    fn integer_exp_round_trips_exactly(exp in -8_000_000_000_000i64..=8_000_000_000_000i64) {
        let token = token(&format!(r#"{{"exp":{exp}}}"#));
        prop_assert_eq!(
            extract_expiration(&token).map(|t| t.timestamp()),
            Some(exp)
        );
    }

    #[test]
    fn arbitrary_payload_bytes_never_panic(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        let span = URL_SAFE_NO_PAD.encode(&payload);
        let _ = extract_expiration(&format!("header.{span}.signature"));
    }
}
