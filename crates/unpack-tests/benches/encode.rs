use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use unpack_core::{EncoderConfig, RunEncoder};

fn bench_encode_runs(c: &mut Criterion) {
    let plain = "z".repeat(10_000);
    let encoder = RunEncoder::new();

    c.bench_function("encode_single_long_run", |b| {
        b.iter(|| encoder.encode(&plain));
    });
}

fn bench_encode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_throughput");
    let escape_all = RunEncoder::with_config(EncoderConfig {
        escape_all: true,
        ..EncoderConfig::default()
    })
    .unwrap();

    for size_kb in [1, 10, 100] {
        let plain: String = "aaaabccddddde\\\\12334😂"
            .chars()
            .cycle()
            .take(size_kb * 1024)
            .collect();

        group.throughput(Throughput::Bytes(plain.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("default", format!("{size_kb}kb")),
            &plain,
            |b, p| b.iter(|| RunEncoder::new().encode(p)),
        );
        group.bench_with_input(
            BenchmarkId::new("escape_all", format!("{size_kb}kb")),
            &plain,
            |b, p| b.iter(|| escape_all.encode(p)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode_runs, bench_encode_throughput);
criterion_main!(benches);
