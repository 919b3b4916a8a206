//! Benchmarks for the indexing core

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use verse_index::{
    import_entries, parse_reference, BibleEntry, HeaderPolicy, IndexConfig, ParagraphId,
    StyledFragment, VerseIndexer,
};

/// Ten books of 50 chapters with 30 verses each
fn synthetic_entries() -> Vec<BibleEntry> {
    let mut entries = Vec::with_capacity(10 * 50 * 30);
    for book in 1..=10 {
        for chapter in 1..=50 {
            for verse in 1..=30 {
                entries.push(BibleEntry::new(
                    format!("{} Book {}:{}", book, chapter, verse),
                    "In the beginning was the Word, and the Word was with God.",
                ));
            }
        }
    }
    entries
}

/// Roughly four paragraphs per page
fn paged_fragments(config: &IndexConfig) -> Vec<StyledFragment> {
    let (story, _) = import_entries(synthetic_entries(), &config.styles);
    let locator = |id: ParagraphId, _: usize| Some((id.0 / 4) as usize);
    story.fragments(&locator).collect()
}

fn bench_parse_reference(c: &mut Criterion) {
    c.bench_function("parse_reference", |b| {
        b.iter(|| black_box(parse_reference(black_box("1 Corinthians 13:4"))));
    });
}

fn bench_import(c: &mut Criterion) {
    let config = IndexConfig::default();
    c.bench_function("import_entries", |b| {
        b.iter_batched(
            synthetic_entries,
            |entries| black_box(import_entries(entries, &config.styles)),
            BatchSize::LargeInput,
        );
    });
}

fn bench_walk(c: &mut Criterion) {
    let config = IndexConfig::default();
    let fragments = paged_fragments(&config);

    c.bench_function("walk_fragments", |b| {
        b.iter_batched(
            || fragments.clone(),
            |fragments| black_box(VerseIndexer::index_fragments(&config, fragments)),
            BatchSize::LargeInput,
        );
    });
}

fn bench_running_heads(c: &mut Criterion) {
    let config = IndexConfig::default();
    let index = VerseIndexer::index_fragments(&config, paged_fragments(&config));
    let page_count = index.map.page_span();

    c.bench_function("running_heads", |b| {
        b.iter(|| black_box(index.running_heads(page_count, HeaderPolicy::SpreadRange)));
    });
}

criterion_group!(
    benches,
    bench_parse_reference,
    bench_import,
    bench_walk,
    bench_running_heads,
);

criterion_main!(benches);
