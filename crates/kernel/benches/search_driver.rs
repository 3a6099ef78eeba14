use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vaddr_kernel::{derive_address, Condition, SearchConfig, SearchDriver};

fn wordlist() -> [&'static str; 2048] {
    core::array::from_fn(|i| match i {
        0 => "abandon",
        102 => "about",
        _ => "zzz",
    })
}

fn bench_derive_address(c: &mut Criterion) {
    let wordlist = wordlist();
    c.bench_function("derive_address", |b| {
        b.iter(|| derive_address(black_box(&[0x42u8; 32]), &wordlist))
    });
}

fn bench_search_driver(c: &mut Criterion) {
    let wordlist = wordlist();
    c.bench_function("search_driver/4_lanes/one_byte_prefix", |b| {
        b.iter(|| {
            let condition = Condition::encode_prefix(&[0x00]).unwrap();
            let config =
                SearchConfig::new([0u8; 32], 4, condition, 256, [0; 20], [0; 20]).unwrap();
            let driver = SearchDriver::new(&config, &wordlist).unwrap();
            driver.run();
            black_box(driver.result());
        })
    });
}

criterion_group!(benches, bench_derive_address, bench_search_driver);
criterion_main!(benches);
