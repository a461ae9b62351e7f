//! The host editing surface
//!
//! Everything the highlighter needs from the editor that embeds it: document
//! text, edits, decoration painting and user prompts. Hosts implement
//! [`EditorSurface`]; [`MemorySurface`] is a rope-backed implementation used by
//! the replay CLI and the tests.

mod memory;

pub use memory::MemorySurface;

use crate::model::{DocumentId, EditorId, EditorRef, Position, TextRange};
use crate::palette::{Color, ColorTag};

pub trait EditorSurface {
    /// The focused editor, if any
    fn active_editor(&self) -> Option<EditorRef>;

    /// Every editor currently on screen
    fn visible_editors(&self) -> Vec<EditorRef>;

    /// Number of lines (a trailing newline starts an empty last line)
    fn line_count(&self, document: DocumentId) -> usize;

    /// Text of one line without its line terminator
    fn line_text(&self, document: DocumentId, line: usize) -> Option<String>;

    /// Insert text; positions past the end clamp to the end of the document
    fn insert_text(&mut self, document: DocumentId, at: Position, text: &str)
        -> Result<(), String>;

    fn delete_text(&mut self, document: DocumentId, range: TextRange) -> Result<(), String>;

    fn save(&mut self, document: DocumentId) -> Result<(), String>;

    /// Register the paint style used for one color
    fn register_style(&mut self, color: ColorTag, style: Color);

    /// Replace every range painted with `color` in `editor`
    fn set_decorations(&mut self, editor: EditorId, color: ColorTag, ranges: &[TextRange]);

    /// Release registered paint styles
    fn dispose_styles(&mut self) {}

    /// Fire-and-forget transient message
    fn show_message(&mut self, text: &str);

    /// Single-choice prompt; `None` when dismissed
    fn pick_color(&mut self, choices: &[ColorTag]) -> Option<ColorTag>;

    /// Check if a line is empty or whitespace only (missing lines count as blank)
    fn is_blank_line(&self, document: DocumentId, line: usize) -> bool {
        self.line_text(document, line)
            .map(|text| text.trim().is_empty())
            .unwrap_or(true)
    }

    /// Length of a line in columns
    fn line_len(&self, document: DocumentId, line: usize) -> usize {
        self.line_text(document, line)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }
}
