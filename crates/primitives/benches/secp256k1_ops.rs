//! Benchmarks for the field arithmetic and base-point scalar multiplication
//! that sit on the hot path of every candidate address derived by the
//! kernel: one `scalar_mul_base` call per entropy value tried.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vaddr_primitives::bigint::Bi256;
use vaddr_primitives::secp256k1::point::scalar_mul_base;
use vaddr_primitives::Fp;

fn sample_fp() -> Fp {
    Fp::new(Bi256::from_u32(0x1234_5678))
}

fn bench_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1 field operations");

    let a = sample_fp();
    let b = Fp::new(Bi256::from_u32(0x0765_4321));

    group.bench_function("add", |bench| bench.iter(|| black_box(a) + black_box(b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("square", |bench| bench.iter(|| black_box(a).square()));
    group.bench_function("inverse", |bench| bench.iter(|| black_box(a).inverse()));

    group.finish();
}

fn bench_scalar_mul_base(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1 base-point scalar multiplication");

    let scalar = Bi256::from_be_bytes(&[0xAB; 32]);

    group.bench_function("scalar_mul_base", |bench| {
        bench.iter(|| scalar_mul_base(black_box(&scalar)))
    });

    group.finish();
}

criterion_group!(benches, bench_field_ops, bench_scalar_mul_base);
criterion_main!(benches);
