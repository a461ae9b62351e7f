//! Highlight store - document identity to interval set

use std::collections::HashMap;

use super::ids::DocumentId;
use super::interval_set::IntervalSet;
use super::span::Span;

/// Every document's highlighted spans
///
/// Entries are created lazily on the first highlight and live until the
/// session is stopped.
#[derive(Debug, Clone, Default)]
pub struct HighlightStore {
    sets: HashMap<DocumentId, IntervalSet>,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document's set, if it was ever highlighted
    pub fn get(&self, document: DocumentId) -> Option<&IntervalSet> {
        self.sets.get(&document)
    }

    /// The document's spans (empty if none)
    pub fn spans(&self, document: DocumentId) -> &[Span] {
        self.sets
            .get(&document)
            .map(IntervalSet::spans)
            .unwrap_or(&[])
    }

    /// The document's set, creating an empty one on first use
    pub fn entry(&mut self, document: DocumentId) -> &mut IntervalSet {
        self.sets.entry(document).or_default()
    }

    /// Empty one document's set, keeping the entry
    pub fn clear_document(&mut self, document: DocumentId) {
        self.entry(document).clear();
    }

    /// Drop every document's spans
    pub fn clear_all(&mut self) {
        self.sets.clear();
    }

    /// Number of documents with an entry
    pub fn document_count(&self) -> usize {
        self.sets.len()
    }

    /// Total number of stored spans across documents
    pub fn span_count(&self) -> usize {
        self.sets.values().map(IntervalSet::len).sum()
    }

    /// Documents with an entry, in id order
    pub fn documents(&self) -> Vec<DocumentId> {
        let mut ids: Vec<_> = self.sets.keys().copied().collect();
        ids.sort();
        ids
    }
}
