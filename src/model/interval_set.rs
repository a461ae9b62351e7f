//! Per-document interval set and the toggle reconciliation
//!
//! Reconciliation merges one stabilized selection into a document's spans:
//!
//! - the selection is carved out of every overlapping span, whatever its color
//! - the selection is then inserted in the active color, unless a span of the
//!   active color already covered it, in which case the carved region stays
//!   unhighlighted (toggle off)
//!
//! Selecting a span exactly in its own color therefore removes it, and
//! selecting inside it punches a hole. Spans stay pairwise disjoint and never
//! degenerate.

use super::position::TextRange;
use super::span::Span;
use crate::palette::ColorTag;

/// Merge one selection range into `current`, returning the new span list
pub fn reconcile(current: &[Span], range: TextRange, color: ColorTag) -> Vec<Span> {
    if range.is_empty() {
        return current.to_vec();
    }

    let covered = current
        .iter()
        .any(|span| span.color == color && span.range.contains_range(&range));

    let mut next = Vec::with_capacity(current.len() + 2);
    for span in current {
        let Some(hit) = span.range.intersection(&range) else {
            next.push(*span);
            continue;
        };
        if span.range.start < hit.start {
            next.push(Span::new(span.range.start, hit.start, span.color));
        }
        if hit.end < span.range.end {
            next.push(Span::new(hit.end, span.range.end, span.color));
        }
    }

    if covered {
        tracing::trace!(%range, %color, "already highlighted, toggling off");
    } else {
        next.push(Span::from_range(range, color));
    }
    next
}

/// Left fold of [`reconcile`] over the ranges of one selection event
pub fn reconcile_all<I>(current: &[Span], ranges: I, color: ColorTag) -> Vec<Span>
where
    I: IntoIterator<Item = TextRange>,
{
    ranges
        .into_iter()
        .fold(current.to_vec(), |spans, range| reconcile(&spans, range, color))
}

/// Highlighted spans of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    spans: Vec<Span>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap spans that are already disjoint and non-empty
    pub fn from_spans(spans: Vec<Span>) -> Self {
        let set = Self { spans };
        set.assert_invariants();
        set
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Reconcile every range of one selection event, in order
    pub fn apply<I>(&mut self, ranges: I, color: ColorTag)
    where
        I: IntoIterator<Item = TextRange>,
    {
        self.spans = reconcile_all(&self.spans, ranges, color);
        self.assert_invariants();
    }

    /// Spans sorted by start position
    pub fn sorted(&self) -> Vec<Span> {
        let mut spans = self.spans.clone();
        spans.sort_by_key(|span| (span.range.start, span.range.end));
        spans
    }

    /// Ranges painted with `color`, in document order
    pub fn ranges_for(&self, color: ColorTag) -> Vec<TextRange> {
        self.sorted()
            .into_iter()
            .filter(|span| span.color == color)
            .map(|span| span.range)
            .collect()
    }

    /// Validate disjointness (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let sorted = self.sorted();
        for span in &sorted {
            debug_assert!(!span.range.is_empty(), "Degenerate span {}", span.range);
        }
        for pair in sorted.windows(2) {
            debug_assert!(
                pair[0].range.end <= pair[1].range.start,
                "Overlapping spans {} and {}",
                pair[0].range,
                pair[1].range
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(sc: usize, ec: usize, color: ColorTag) -> Span {
        Span::from_range(TextRange::from_coords(0, sc, 0, ec), color)
    }

    #[test]
    fn test_empty_range_is_ignored() {
        let current = vec![span(0, 4, ColorTag::Red)];
        let next = reconcile(&current, TextRange::from_coords(0, 2, 0, 2), ColorTag::Blue);
        assert_eq!(next, current);
    }

    #[test]
    fn test_partial_overlap_trims_left_side() {
        let current = vec![span(0, 10, ColorTag::Red)];
        let next = reconcile(&current, TextRange::from_coords(0, 6, 0, 14), ColorTag::Red);
        assert_eq!(
            next,
            vec![span(0, 6, ColorTag::Red), span(6, 14, ColorTag::Red)]
        );
    }

    #[test]
    fn test_selection_spanning_two_colors_trims_both() {
        let current = vec![span(0, 5, ColorTag::Red), span(5, 10, ColorTag::Green)];
        let next = reconcile(&current, TextRange::from_coords(0, 3, 0, 7), ColorTag::Blue);
        assert_eq!(
            next,
            vec![
                span(0, 3, ColorTag::Red),
                span(7, 10, ColorTag::Green),
                span(3, 7, ColorTag::Blue),
            ]
        );
    }

    #[test]
    fn test_inner_selection_in_same_color_punches_hole() {
        let current = vec![span(0, 10, ColorTag::Red)];
        let next = reconcile(&current, TextRange::from_coords(0, 3, 0, 6), ColorTag::Red);
        assert_eq!(
            next,
            vec![span(0, 3, ColorTag::Red), span(6, 10, ColorTag::Red)]
        );
    }

    #[test]
    fn test_selection_covering_span_swallows_it() {
        let current = vec![span(2, 4, ColorTag::Yellow)];
        let next = reconcile(
            &current,
            TextRange::from_coords(0, 0, 0, 8),
            ColorTag::Yellow,
        );
        assert_eq!(next, vec![span(0, 8, ColorTag::Yellow)]);
    }

    #[test]
    fn test_interval_set_apply_folds_in_order() {
        let mut set = IntervalSet::new();
        let r = TextRange::from_coords(0, 0, 0, 4);
        // the second range sees the first one's insertion and toggles it off
        set.apply([r, r], ColorTag::Red);
        assert!(set.is_empty());
    }

    #[test]
    fn test_ranges_for_sorted_by_position() {
        let set = IntervalSet::from_spans(vec![
            span(8, 9, ColorTag::Red),
            span(0, 2, ColorTag::Red),
            span(4, 6, ColorTag::Blue),
        ]);
        assert_eq!(
            set.ranges_for(ColorTag::Red),
            vec![
                TextRange::from_coords(0, 0, 0, 2),
                TextRange::from_coords(0, 8, 0, 9),
            ]
        );
        assert!(set.ranges_for(ColorTag::Green).is_empty());
    }
}
