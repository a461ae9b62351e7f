//! Host identifiers for documents and editor views

use serde::{Deserialize, Serialize};

/// Stable identity of an open document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub u64);

/// Unique identifier for a visible editor view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorId(pub u64);

/// An editor view together with the document it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorRef {
    pub editor: EditorId,
    pub document: DocumentId,
}

impl EditorRef {
    pub fn new(editor: EditorId, document: DocumentId) -> Self {
        Self { editor, document }
    }
}
