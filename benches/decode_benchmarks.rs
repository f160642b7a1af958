use criterion::{criterion_group, criterion_main, Criterion};
use snowdec::{Layout, SnowflakeDecoder};
use std::hint::black_box;

const SAMPLE_ID: u64 = 175928847299117063;

pub fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode");

    for (name, layout) in [
        ("worker_process", Layout::WorkerProcess),
        ("machine", Layout::Machine),
    ] {
        let decoder = SnowflakeDecoder::new(layout);
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(decoder.decode(black_box(SAMPLE_ID)));
            });
        });
    }

    group.finish();
}

pub fn describe_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Describe");
    let decoder = SnowflakeDecoder::new(Layout::Machine);
    let decoded = decoder.decode(SAMPLE_ID);

    group.bench_function("description", |b| {
        b.iter(|| {
            black_box(decoded.description());
        });
    });

    group.finish();
}

criterion_group!(benches, decode_benchmarks, describe_benchmarks);
criterion_main!(benches);
