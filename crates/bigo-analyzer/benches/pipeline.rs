use bigo_analyzer::{analyze, samples};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

fn bench_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_samples");
    group.measurement_time(Duration::from_secs(5));

    for sample in samples() {
        group.throughput(Throughput::Bytes(sample.code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sample.name), sample.code, |b, code| {
            b.iter(|| analyze(black_box(code)))
        });
    }

    group.finish();
}

/// Many copies of a nested loop, to see how the parser and the
/// backtracking space check scale with input size.
fn bench_input_size(c: &mut Criterion) {
    let unit = "for (let i = 0; i < n; i++) {\n  for (let j = 0; j < n; j++) { total += i * j; }\n}\n";
    let mut group = c.benchmark_group("analyze_input_size");

    for copies in [1usize, 16, 128] {
        let code = format!("function work(n) {{\n{}}}", unit.repeat(copies));
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &code, |b, code| {
            b.iter(|| analyze(black_box(code)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_samples, bench_input_size);
criterion_main!(benches);
