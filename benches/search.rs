//! Benchmarks for forward search.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use crane::editor::Document;
use crane::search;

fn bench_find_last_line(c: &mut Criterion) {
    let mut lines = vec!["nothing to see here".to_string(); 10_000];
    lines.push("needle".to_string());
    let doc = Document::from_lines(lines);
    c.bench_function("find_last_line_10k", |b| {
        b.iter(|| search::find(black_box("needle"), &doc, 0));
    });
}

fn bench_find_missing(c: &mut Criterion) {
    let doc = Document::from_lines(vec!["héllo wörld ünïcode".to_string(); 10_000]);
    c.bench_function("find_missing_unicode_10k", |b| {
        b.iter(|| search::find(black_box("absent"), &doc, 0));
    });
}

criterion_group!(benches, bench_find_last_line, bench_find_missing);
criterion_main!(benches);
