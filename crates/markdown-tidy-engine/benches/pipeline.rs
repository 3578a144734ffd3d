use criterion::{Criterion, criterion_group, criterion_main};
use markdown_tidy_engine::{format, parse};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(50);

    let document = common::generate_document(100);
    group.bench_function("mixed_document", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&document));
            std::hint::black_box(doc);
        });
    });

    let table = common::generate_wide_table(500, 12);
    group.bench_function("wide_table", |b| {
        b.iter(|| {
            let doc = parse(std::hint::black_box(&table));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.sample_size(50);

    let document = parse(&common::generate_document(100));
    group.bench_function("mixed_document", |b| {
        b.iter(|| {
            let out = format(std::hint::black_box(&document));
            std::hint::black_box(out);
        });
    });

    let list = parse(&common::generate_deep_list(2000, 6));
    group.bench_function("deep_list", |b| {
        b.iter(|| {
            let out = format(std::hint::black_box(&list));
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
