//! Benchmarks for the cipher engines.
//!
//! Measures encryption throughput for each cipher over a fixed text, and
//! Playfair key-square construction on its own.

use classicrypt::{process, Caesar, Cipher, KeySquare, Playfair, TransformRequest, Vigenere};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Plaintext used consistently across all benchmarks.
const BENCH_TEXT: &str = "The quick brown fox jumps over the lazy dog, again and again!";

/// Benchmarks `KeySquare::from_key()` for short and long keys.
fn bench_key_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_square");
    for key in ["", "MONARCHY", "the quick brown fox jumps over the lazy dog"] {
        group.bench_with_input(BenchmarkId::from_parameter(key.len()), &key, |b, key| {
            b.iter(|| KeySquare::from_key(black_box(key)));
        });
    }
    group.finish();
}

/// Benchmarks encryption for each cipher across text lengths.
fn bench_encrypt(c: &mut Criterion) {
    let caesar = Caesar::new(3);
    let vigenere = Vigenere::new("LEMON").unwrap();
    let playfair = Playfair::new("MONARCHY");
    let ciphers: [&dyn Cipher; 3] = [&caesar, &vigenere, &playfair];

    for repeat in [1usize, 16] {
        let text = BENCH_TEXT.repeat(repeat);
        let mut group = c.benchmark_group(format!("encrypt_{}x", repeat));
        group.throughput(Throughput::Bytes(text.len() as u64));
        for cipher in ciphers {
            group.bench_function(cipher.name(), |b| {
                b.iter(|| cipher.encrypt(black_box(&text)).unwrap());
            });
        }
        group.finish();
    }
}

/// Benchmarks the full dispatch path including request validation.
fn bench_dispatch(c: &mut Criterion) {
    let request = TransformRequest::new(BENCH_TEXT, "MONARCHY", "Playfair", "encrypt");
    c.bench_function("dispatch_playfair", |b| {
        b.iter(|| process(black_box(&request)).unwrap());
    });
}

criterion_group!(benches, bench_key_square, bench_encrypt, bench_dispatch);
criterion_main!(benches);
