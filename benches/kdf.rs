//! benches/kdf.rs
//! scrypt key derivation (N = 16384, r = 8, p = 1)
use criterion::{criterion_group, criterion_main, Criterion};
use rclone_crypt::{derive_key, derive_key_into, DataKey};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let pw = b"benchmark-password";
    let salt = [0x42u8; 16];

    group.bench_function("scrypt_alloc", |b| {
        b.iter(|| black_box(derive_key(black_box(pw), black_box(&salt)).unwrap()));
    });

    group.bench_function("scrypt_into", |b| {
        let mut key = DataKey::new([0u8; 32]);
        b.iter(|| {
            derive_key_into(black_box(pw), black_box(&salt), &mut key).unwrap();
            black_box(&key);
        });
    });

    // Empty password short-circuits to the zero key
    group.bench_function("empty_password", |b| {
        b.iter(|| black_box(derive_key(black_box(b""), black_box(&salt)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
