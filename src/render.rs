//! Render adapter - interval sets to per-color decoration batches

use crate::model::{EditorId, IntervalSet, TextRange};
use crate::palette::ColorTag;
use crate::surface::EditorSurface;

/// Ranges to paint for every palette color, in palette order
///
/// Colors without spans get an empty list so stale decorations are wiped.
pub fn decoration_batches(set: Option<&IntervalSet>) -> Vec<(ColorTag, Vec<TextRange>)> {
    ColorTag::ALL
        .into_iter()
        .map(|color| {
            let ranges = set.map(|s| s.ranges_for(color)).unwrap_or_default();
            (color, ranges)
        })
        .collect()
}

/// Paint a document's spans into an editor
pub fn paint<S: EditorSurface + ?Sized>(
    surface: &mut S,
    editor: EditorId,
    set: Option<&IntervalSet>,
) {
    let batches = decoration_batches(set);
    let painted: usize = batches.iter().map(|(_, ranges)| ranges.len()).sum();
    for (color, ranges) in &batches {
        surface.set_decorations(editor, *color, ranges);
    }
    tracing::trace!(editor = editor.0, painted, "painted highlights");
}

/// Remove every highlight decoration from an editor
pub fn clear<S: EditorSurface + ?Sized>(surface: &mut S, editor: EditorId) {
    paint(surface, editor, None);
}
