// benches/convert_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use endian_rs::*;

fn benchmark_slice_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_big_endian_slice");

    for width in [2usize, 4, 8].iter() {
        group.throughput(Throughput::Bytes(*width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            let mut buf = vec![0x5Au8; width];
            b.iter(|| {
                to_big_endian(black_box(&mut buf)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_typed_wrappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_wrappers");

    group.bench_function("big_endian_i32", |b| {
        b.iter(|| big_endian_i32(black_box(0x0102_0304)));
    });
    group.bench_function("big_endian_i64", |b| {
        b.iter(|| big_endian_i64(black_box(0x0102_0304_0506_0708)));
    });
    group.bench_function("little_endian_f64", |b| {
        b.iter(|| little_endian_f64(black_box(3.141592653589793)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_slice_convert, benchmark_typed_wrappers);
criterion_main!(benches);
