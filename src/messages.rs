//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::commands::CommandId;
use crate::model::{DocumentId, EditorRef, Selection};
use crate::palette::ColorTag;

/// Selection events from the host and the debounce timer
#[derive(Debug, Clone)]
pub enum SelectionMsg {
    /// The host reported the current selections of an editor
    Changed {
        target: EditorRef,
        selections: Vec<Selection>,
    },
    /// The quiet interval scheduled with `generation` elapsed
    Stable { generation: u64 },
}

/// Editor and document lifecycle events
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// The focused editor changed (None when no editor has focus)
    ActiveChanged(Option<EditorRef>),
    /// A trailing blank line was inserted into the document by us
    EofPadded(DocumentId),
    /// Our trailing blank line is gone (removed, or overwritten by content)
    EofReverted(DocumentId),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// A user command was invoked
    Command(CommandId),
    /// The color pick prompt finished (None when dismissed)
    ColorPicked(Option<ColorTag>),
    Selection(SelectionMsg),
    Editor(EditorMsg),
}
