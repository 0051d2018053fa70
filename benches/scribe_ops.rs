//! Benchmarks for the scribe pipeline and the wedge matcher.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dubsar::catalog::SignCatalog;
use dubsar::mapping::SyllableTable;
use dubsar::scribe::{self, RenderOptions};
use dubsar::wedge::{self, Tolerance, WedgeComposition};

const SAMPLE: &str = "gilgamesh king of uruk built the great wall\n\
                      enkidu came from the wild steppe to meet him\n\
                      together they journeyed to the cedar forest";

fn bench_segment(c: &mut Criterion) {
    let table = SyllableTable::bundled();
    c.bench_function("segment_word", |b| {
        b.iter(|| black_box(scribe::segment(black_box("gilgamesh"), table)))
    });
}

fn bench_render(c: &mut Criterion) {
    let table = SyllableTable::bundled();
    let options = RenderOptions::default();
    c.bench_function("render_three_lines", |b| {
        b.iter(|| black_box(scribe::render(black_box(SAMPLE), table, &options)))
    });
    c.bench_function("to_script_three_lines", |b| {
        b.iter(|| black_box(scribe::to_script(black_box(SAMPLE), table, &options)))
    });
}

fn bench_stats(c: &mut Criterion) {
    let table = SyllableTable::bundled();
    let options = RenderOptions::default();
    c.bench_function("stats_three_lines", |b| {
        b.iter(|| black_box(scribe::stats(black_box(SAMPLE), table, &options)))
    });
}

fn bench_wedge_search(c: &mut Criterion) {
    let catalog = SignCatalog::bundled();
    let target = WedgeComposition::new(2, 1, 0, 1);
    let tolerance = Tolerance::uniform(1);
    c.bench_function("wedge_search_catalog", |b| {
        b.iter(|| black_box(wedge::search(catalog, black_box(&target), &tolerance)))
    });
}

criterion_group!(
    benches,
    bench_segment,
    bench_render,
    bench_stats,
    bench_wedge_search
);
criterion_main!(benches);
