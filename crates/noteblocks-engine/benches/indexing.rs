use criterion::{Criterion, criterion_group, criterion_main};
use noteblocks_engine::blocks::index;
use noteblocks_engine::editing::Document;
mod common;

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    group.sample_size(20);

    for blocks in [10, 100, 1000] {
        let content = common::generate_buffer(blocks);
        let doc = Document::from_bytes(content.as_bytes()).unwrap();

        group.bench_function(format!("index_{blocks}_blocks"), |b| {
            b.iter(|| {
                let list = index(std::hint::black_box(&doc)).unwrap();
                std::hint::black_box(list);
            });
        });
    }

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let content = common::generate_buffer(1000);
    group.bench_function("parse_1000_blocks", |b| {
        b.iter(|| {
            let tree = noteblocks_syntax::parse(std::hint::black_box(&content));
            std::hint::black_box(tree);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_indexing, bench_parsing);
criterion_main!(benches);
