//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Instant;

use highlighter::model::{
    DocumentId, EditorRef, HighlightModel, Position, Selection, Span, TextRange,
};
use highlighter::palette::ColorTag;
use highlighter::runtime::Runtime;
use highlighter::surface::MemorySurface;
use highlighter::HighlighterConfig;

/// Span on line 0 from `start_col` to `end_col`
pub fn line_span(start_col: usize, end_col: usize, color: ColorTag) -> Span {
    Span::from_range(TextRange::from_coords(0, start_col, 0, end_col), color)
}

/// Range on line 0 from `start_col` to `end_col`
pub fn line_range(start_col: usize, end_col: usize) -> TextRange {
    TextRange::from_coords(0, start_col, 0, end_col)
}

/// Sort spans by position so results can be compared independent of order
pub fn sorted(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|s| (s.range.start, s.range.end));
    spans
}

/// Total highlighted columns, for spans that all sit on line 0
pub fn covered_columns(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| {
            assert_eq!(s.range.start.line, 0);
            assert_eq!(s.range.end.line, 0);
            s.range.end.column - s.range.start.column
        })
        .sum()
}

/// Assert that no span is empty and no two spans overlap
pub fn assert_disjoint(spans: &[Span]) {
    let spans = sorted(spans.to_vec());
    for span in &spans {
        assert!(!span.range.is_empty(), "degenerate span {:?}", span);
    }
    for pair in spans.windows(2) {
        assert!(
            pair[0].range.end <= pair[1].range.start,
            "overlap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// A selection from (anchor_line, anchor_col) to (head_line, head_col)
pub fn sel(anchor_line: usize, anchor_col: usize, head_line: usize, head_col: usize) -> Selection {
    Selection::from_anchor_head(
        Position::new(anchor_line, anchor_col),
        Position::new(head_line, head_col),
    )
}

/// Runtime over an in-memory surface with the given documents open
///
/// Document ids are 1-based in the order given; the first is focused.
pub fn test_session(texts: &[&str]) -> (Runtime<MemorySurface>, Vec<EditorRef>) {
    test_session_with_config(texts, HighlighterConfig::default())
}

pub fn test_session_with_config(
    texts: &[&str],
    config: HighlighterConfig,
) -> (Runtime<MemorySurface>, Vec<EditorRef>) {
    let mut surface = MemorySurface::new();
    let targets = texts
        .iter()
        .enumerate()
        .map(|(i, text)| surface.open(DocumentId(i as u64 + 1), text))
        .collect();
    let runtime = Runtime::new(HighlightModel::new(config), surface, Instant::now());
    (runtime, targets)
}

/// Report selections and let them settle into highlights
pub fn commit(runtime: &mut Runtime<MemorySurface>, target: EditorRef, selections: Vec<Selection>) {
    runtime.selection_changed(target, selections);
    runtime.settle();
}

/// The document's spans in position order
pub fn spans_of(runtime: &Runtime<MemorySurface>, target: EditorRef) -> Vec<Span> {
    sorted(runtime.model().store.spans(target.document).to_vec())
}
