//! In-memory editor surface backed by ropes

use std::collections::{BTreeMap, HashMap, VecDeque};

use ropey::Rope;

use super::EditorSurface;
use crate::model::{DocumentId, EditorId, EditorRef, Position, TextRange};
use crate::palette::{Color, ColorTag};

#[derive(Debug, Clone)]
struct MemoryDocument {
    buffer: Rope,
    save_count: usize,
}

/// A headless editor: one editor view per open document, all of them visible
#[derive(Debug, Default)]
pub struct MemorySurface {
    documents: BTreeMap<DocumentId, MemoryDocument>,
    editors: Vec<EditorRef>,
    active: Option<EditorId>,
    styles: HashMap<ColorTag, Color>,
    decorations: HashMap<(EditorId, ColorTag), Vec<TextRange>>,
    messages: Vec<String>,
    /// Answers for upcoming color prompts, in order
    picks: VecDeque<Option<ColorTag>>,
    /// When set, every edit fails with this error
    edit_error: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document in a new editor (editor id = document id)
    ///
    /// The first opened document becomes the active editor.
    pub fn open(&mut self, document: DocumentId, text: &str) -> EditorRef {
        self.documents.insert(
            document,
            MemoryDocument {
                buffer: Rope::from_str(text),
                save_count: 0,
            },
        );
        let target = EditorRef::new(EditorId(document.0), document);
        if !self.editors.contains(&target) {
            self.editors.push(target);
        }
        if self.active.is_none() {
            self.active = Some(target.editor);
        }
        target
    }

    /// Give focus to the editor showing `document`
    pub fn focus(&mut self, document: DocumentId) -> Option<EditorRef> {
        let target = self
            .editors
            .iter()
            .copied()
            .find(|e| e.document == document)?;
        self.active = Some(target.editor);
        Some(target)
    }

    /// Remove focus from every editor
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Full document text
    pub fn text(&self, document: DocumentId) -> Option<String> {
        self.documents.get(&document).map(|d| d.buffer.to_string())
    }

    pub fn save_count(&self, document: DocumentId) -> usize {
        self.documents
            .get(&document)
            .map(|d| d.save_count)
            .unwrap_or(0)
    }

    /// Ranges currently painted with `color` in `editor`
    pub fn decorations(&self, editor: EditorId, color: ColorTag) -> &[TextRange] {
        self.decorations
            .get(&(editor, color))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of painted ranges in `editor`
    pub fn decoration_count(&self, editor: EditorId) -> usize {
        ColorTag::ALL
            .into_iter()
            .map(|color| self.decorations(editor, color).len())
            .sum()
    }

    pub fn style(&self, color: ColorTag) -> Option<Color> {
        self.styles.get(&color).copied()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Queue the answer for the next color prompt
    pub fn queue_pick(&mut self, pick: Option<ColorTag>) {
        self.picks.push_back(pick);
    }

    /// Make every subsequent edit fail (None restores normal behavior)
    pub fn fail_edits(&mut self, error: Option<&str>) {
        self.edit_error = error.map(str::to_string);
    }

    fn document_mut(&mut self, document: DocumentId) -> Result<&mut MemoryDocument, String> {
        if let Some(error) = &self.edit_error {
            return Err(error.clone());
        }
        self.documents
            .get_mut(&document)
            .ok_or_else(|| format!("Document {} is not open", document.0))
    }
}

/// Char index of `pos`, clamped to the document
fn char_index(buffer: &Rope, pos: Position) -> usize {
    if pos.line >= buffer.len_lines() {
        return buffer.len_chars();
    }
    let line_start = buffer.line_to_char(pos.line);
    line_start + pos.column.min(line_length(buffer, pos.line))
}

/// Line length excluding the line terminator
fn line_length(buffer: &Rope, line_idx: usize) -> usize {
    let line = buffer.line(line_idx);
    let len = line.len_chars();
    let before_last = len.checked_sub(2).map(|i| line.char(i));
    match (before_last, line.chars().last()) {
        (Some('\r'), Some('\n')) => len - 2,
        (_, Some('\n')) => len - 1,
        _ => len,
    }
}

impl EditorSurface for MemorySurface {
    fn active_editor(&self) -> Option<EditorRef> {
        let active = self.active?;
        self.editors.iter().copied().find(|e| e.editor == active)
    }

    fn visible_editors(&self) -> Vec<EditorRef> {
        self.editors.clone()
    }

    fn line_count(&self, document: DocumentId) -> usize {
        self.documents
            .get(&document)
            .map(|d| d.buffer.len_lines())
            .unwrap_or(0)
    }

    fn line_text(&self, document: DocumentId, line: usize) -> Option<String> {
        let buffer = &self.documents.get(&document)?.buffer;
        if line >= buffer.len_lines() {
            return None;
        }
        let text: String = buffer.line(line).chars().collect();
        Some(text.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    fn insert_text(
        &mut self,
        document: DocumentId,
        at: Position,
        text: &str,
    ) -> Result<(), String> {
        let doc = self.document_mut(document)?;
        let idx = char_index(&doc.buffer, at);
        doc.buffer.insert(idx, text);
        Ok(())
    }

    fn delete_text(&mut self, document: DocumentId, range: TextRange) -> Result<(), String> {
        let doc = self.document_mut(document)?;
        let start = char_index(&doc.buffer, range.start);
        let end = char_index(&doc.buffer, range.end);
        if start < end {
            doc.buffer.remove(start..end);
        }
        Ok(())
    }

    fn save(&mut self, document: DocumentId) -> Result<(), String> {
        let doc = self.document_mut(document)?;
        doc.save_count += 1;
        Ok(())
    }

    fn register_style(&mut self, color: ColorTag, style: Color) {
        self.styles.insert(color, style);
    }

    fn set_decorations(&mut self, editor: EditorId, color: ColorTag, ranges: &[TextRange]) {
        if ranges.is_empty() {
            self.decorations.remove(&(editor, color));
        } else {
            self.decorations.insert((editor, color), ranges.to_vec());
        }
    }

    fn dispose_styles(&mut self) {
        self.styles.clear();
        self.decorations.clear();
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn pick_color(&mut self, choices: &[ColorTag]) -> Option<ColorTag> {
        self.picks
            .pop_front()
            .flatten()
            .filter(|pick| choices.contains(pick))
    }
}
