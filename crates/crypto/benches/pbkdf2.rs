//! Benchmarks the BIP39 seed derivation, the single most expensive step in
//! the per-candidate pipeline (2048 HMAC-SHA512 evaluations).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vaddr_crypto::{bip39_seed, keccak256, sha256};

fn bench_bip39_seed(c: &mut Criterion) {
    c.bench_function("bip39_seed (2048 iterations)", |bench| {
        bench.iter(|| bip39_seed(black_box("abandon abandon ability"), black_box("")))
    });
}

fn bench_sha256(c: &mut Criterion) {
    let data = [0u8; 32];
    c.bench_function("sha256 (32-byte input)", |bench| {
        bench.iter(|| sha256(black_box(&data)))
    });
}

fn bench_keccak256(c: &mut Criterion) {
    let data = [0u8; 64];
    c.bench_function("keccak256 (64-byte input)", |bench| {
        bench.iter(|| keccak256(black_box(&data)))
    });
}

criterion_group!(benches, bench_bip39_seed, bench_sha256, bench_keccak256);
criterion_main!(benches);
