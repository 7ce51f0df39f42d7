use criterion::{Criterion, criterion_group, criterion_main};
use noteblocks_engine::editing::{Cmd, Document, Editor};
mod common;

fn bench_keystrokes(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystrokes");
    group.sample_size(10);

    let content = common::generate_buffer(100);
    let doc = Document::from_bytes(content.as_bytes()).unwrap();

    group.bench_function("insert_char", |b| {
        let mut editor = Editor::with_extension(doc.clone());
        b.iter(|| {
            let patch = editor.apply(Cmd::InsertText {
                text: std::hint::black_box("x".to_string()),
            });
            std::hint::black_box(patch);
        });
    });

    group.bench_function("move_left", |b| {
        let mut editor = Editor::with_extension(doc.clone());
        b.iter(|| {
            let patch = editor.apply(Cmd::MoveLeft { extend: false });
            std::hint::black_box(patch);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_keystrokes);
criterion_main!(benches);
