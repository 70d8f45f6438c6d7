use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rclone_crypt::DataKey;
use std::hint::black_box;
use std::io::Cursor;

fn bench_batch(c: &mut Criterion) {
    let key = DataKey::new([0x42; 32]);
    let data = black_box(vec![0u8; 10_000_000]); // 10 MB

    let mut group = c.benchmark_group("batch-ops");
    group.sample_size(10);

    for n_files in [1, 2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("parallel", n_files), &n_files, |b, &n| {
            b.iter_batched(
                || {
                    (0..n)
                        .map(|_| (Cursor::new(data.as_slice()), Vec::<u8>::new()))
                        .collect::<Vec<_>>()
                },
                |mut batch| rclone_crypt::encrypt_batch(&mut batch, &key).unwrap(),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("sequential", n_files),
            &n_files,
            |b, &n| {
                b.iter(|| {
                    for _ in 0..n {
                        let mut out = Vec::new();
                        rclone_crypt::encrypt(Cursor::new(&data), &mut out, &key).unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
