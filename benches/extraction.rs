//! Hot-path benchmarks for expiration extraction.
//!
//! Measures extraction throughput across payload sizes and the cost of
//! the common rejection paths.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use jwt_expiry::extract_expiration;
use std::hint::black_box;

fn token_with_payload_size(payload_size: usize) -> String {
    let mut payload =
        r#"{"sub":"user123","iss":"https://example.com","iat":1516239022,"exp":1999999999"#
            .to_string();
    let filler = payload_size.saturating_sub(payload.len() + 12);
    if filler > 0 {
        payload.push_str(",\"data\":\"");
        payload.push_str(&"x".repeat(filler));
        payload.push_str("\"}");
    } else {
        payload.push('}');
    }

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(&payload);
    format!("{header}.{payload}.signature")
}

fn bench_extract_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let token = token_with_payload_size(size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| extract_expiration(black_box(&token)));
        });
    }

    group.finish();
}

fn bench_rejection_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection_paths");

    group.bench_function("empty", |b| {
        b.iter(|| extract_expiration(black_box("")));
    });
    group.bench_function("missing_delimiters", |b| {
        b.iter(|| extract_expiration(black_box("not-a-token")));
    });
    group.bench_function("undecodable_payload", |b| {
        b.iter(|| extract_expiration(black_box("invalid.jwt.token")));
    });

    group.finish();
}

criterion_group!(benches, bench_extract_by_size, bench_rejection_paths);
criterion_main!(benches);
