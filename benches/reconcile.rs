//! Benchmarks for span reconciliation and session dispatch
//!
//! Run with: cargo bench reconcile

use std::time::{Duration, Instant};

use highlighter::model::{
    reconcile, DocumentId, HighlightModel, IntervalSet, Position, Selection, Span, TextRange,
};
use highlighter::palette::ColorTag;
use highlighter::surface::MemorySurface;
use highlighter::{CommandId, Runtime};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// One span per line, alternating colors
fn striped_spans(count: usize) -> Vec<Span> {
    (0..count)
        .map(|line| {
            let color = ColorTag::ALL[line % ColorTag::ALL.len()];
            Span::from_range(TextRange::from_coords(line, 2, line, 20), color)
        })
        .collect()
}

// ============================================================================
// Single reconciliation
// ============================================================================

#[divan::bench(args = [10, 100, 1_000, 10_000])]
fn reconcile_free_range(span_count: usize) {
    let spans = striped_spans(span_count);
    let range = TextRange::from_coords(span_count + 1, 0, span_count + 1, 10);
    divan::black_box(reconcile(&spans, range, ColorTag::Blue));
}

#[divan::bench(args = [10, 100, 1_000, 10_000])]
fn reconcile_split_middle(span_count: usize) {
    let spans = striped_spans(span_count);
    let line = span_count / 2;
    let range = TextRange::from_coords(line, 5, line, 10);
    divan::black_box(reconcile(&spans, range, ColorTag::Pink));
}

#[divan::bench(args = [10, 100, 1_000, 10_000])]
fn reconcile_across_all(span_count: usize) {
    let spans = striped_spans(span_count);
    let range = TextRange::from_coords(0, 10, span_count - 1, 10);
    divan::black_box(reconcile(&spans, range, ColorTag::Green));
}

// ============================================================================
// Many selections
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn apply_sequential_ranges(range_count: usize) {
    let ranges: Vec<_> = (0..range_count)
        .map(|line| TextRange::from_coords(line, 0, line, 8))
        .collect();
    let mut set = IntervalSet::new();
    set.apply(ranges, ColorTag::Yellow);
    divan::black_box(set);
}

#[divan::bench(args = [100, 1_000])]
fn session_dispatch(selection_count: usize) {
    let text = "The quick brown fox jumps over the lazy dog.\n".repeat(selection_count);
    let mut surface = MemorySurface::new();
    let target = surface.open(DocumentId(1), &text);
    let mut runtime = Runtime::new(HighlightModel::default(), surface, Instant::now());
    runtime.run_command(CommandId::StartHighlighting);

    for line in 0..selection_count {
        let selection =
            Selection::from_anchor_head(Position::new(line, 4), Position::new(line, 9));
        runtime.selection_changed(target, vec![selection]);
        runtime.advance_by(Duration::from_millis(300));
    }
    divan::black_box(runtime.model().store.span_count());
}
