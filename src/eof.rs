//! End-of-file padding
//!
//! When a highlight runs to the very end of a document whose last line has
//! content, a blank line is appended so the highlight does not bleed into
//! text typed at the end. The documents we padded are remembered so the line
//! can be taken out again when their highlights are cleared.

use std::collections::HashSet;

use crate::model::{DocumentId, Position, Span, TextRange};
use crate::surface::EditorSurface;

/// Documents carrying a blank line we appended
#[derive(Debug, Clone, Default)]
pub struct EofPadding {
    padded: HashSet<DocumentId>,
}

impl EofPadding {
    pub fn is_padded(&self, document: DocumentId) -> bool {
        self.padded.contains(&document)
    }

    pub fn mark(&mut self, document: DocumentId) {
        self.padded.insert(document);
    }

    pub fn unmark(&mut self, document: DocumentId) {
        self.padded.remove(&document);
    }
}

/// Result of trying to take our blank line back out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertOutcome {
    /// The blank line was deleted and the document saved
    Removed,
    /// The last line now has content (or there is nothing left to remove)
    Superseded,
}

/// Position just past the last character of the document
pub fn end_of_document<S: EditorSurface + ?Sized>(
    surface: &S,
    document: DocumentId,
) -> Option<Position> {
    let last_line = surface.line_count(document).checked_sub(1)?;
    Some(Position::new(
        last_line,
        surface.line_len(document, last_line),
    ))
}

/// Check if any span ends exactly at the end of the document
pub fn touches_eof<S: EditorSurface + ?Sized>(
    surface: &S,
    document: DocumentId,
    spans: &[Span],
) -> bool {
    end_of_document(surface, document)
        .map(|end| spans.iter().any(|span| span.range.end == end))
        .unwrap_or(false)
}

/// Append a blank line if a span touches the end of a non-blank last line
///
/// Returns `true` when a line was inserted.
pub fn ensure_padding<S: EditorSurface + ?Sized>(
    surface: &mut S,
    document: DocumentId,
    spans: &[Span],
) -> Result<bool, String> {
    if !touches_eof(surface, document, spans) {
        return Ok(false);
    }
    let line_count = surface.line_count(document);
    if surface.is_blank_line(document, line_count - 1) {
        return Ok(false);
    }
    surface.insert_text(document, Position::new(line_count, 0), "\n")?;
    tracing::debug!(
        document = document.0,
        "appended blank line at end of document"
    );
    Ok(true)
}

/// Delete the trailing blank line we appended
///
/// Only call this for documents marked in [`EofPadding`].
pub fn revert_padding<S: EditorSurface + ?Sized>(
    surface: &mut S,
    document: DocumentId,
) -> Result<RevertOutcome, String> {
    let line_count = surface.line_count(document);
    if line_count < 2 {
        return Ok(RevertOutcome::Superseded);
    }
    let last_line = line_count - 1;
    if !surface.is_blank_line(document, last_line) {
        return Ok(RevertOutcome::Superseded);
    }

    let prev_line = last_line - 1;
    let range = TextRange::new(
        Position::new(prev_line, surface.line_len(document, prev_line)),
        Position::new(last_line, surface.line_len(document, last_line)),
    );
    surface.delete_text(document, range)?;
    surface.save(document)?;
    tracing::debug!(document = document.0, "removed trailing blank line");
    Ok(RevertOutcome::Removed)
}
