use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stext::{from_str, to_string, Document};

fn synthetic_document(entries: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..entries {
        if i % 10 == 0 {
            doc.insert(
                format!("DESC_{i}"),
                format!("multi-line value {i}\nwith a second line\nand a third"),
            );
        } else {
            doc.insert(format!("KEY_{i}"), format!("value number {i}"));
        }
    }
    doc
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&synthetic_document(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 100, 1000].iter() {
        let doc = synthetic_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_string(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_freetext_fallback(c: &mut Criterion) {
    let prose: String = (0..200)
        .map(|i| format!("unstructured prose line number {i}\n"))
        .collect();

    c.bench_function("freetext_fallback", |b| {
        b.iter(|| from_str(black_box(&prose)))
    });
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = synthetic_document(50);

    c.bench_function("roundtrip_50_entries", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&doc));
            let _doc_back = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_extract,
    benchmark_serialize,
    benchmark_freetext_fallback,
    benchmark_roundtrip
);
criterion_main!(benches);
