//! Highlighter model - the complete session state
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod ids;
pub mod interval_set;
pub mod position;
pub mod span;
pub mod store;

pub use ids::{DocumentId, EditorId, EditorRef};
pub use interval_set::{reconcile, reconcile_all, IntervalSet};
pub use position::{Position, Selection, TextRange};
pub use span::Span;
pub use store::HighlightStore;

use crate::config::HighlighterConfig;
use crate::debounce::StabilityDebouncer;
use crate::eof::EofPadding;
use crate::palette::{ColorTag, Palette};

/// Whether selections currently produce highlights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeController {
    active: bool,
}

impl ModeController {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }
}

/// The complete highlighter state
///
/// One instance lives for the whole host session and is handed to every
/// update; there is no other mutable state.
#[derive(Debug)]
pub struct HighlightModel {
    pub mode: ModeController,
    /// Color applied to newly created spans
    pub active_color: ColorTag,
    pub store: HighlightStore,
    pub debouncer: StabilityDebouncer,
    /// Documents that carry a blank line we appended
    pub eof: EofPadding,
    /// The focused editor, as last reported by the host
    pub active_editor: Option<EditorRef>,
    pub palette: Palette,
    pub config: HighlighterConfig,
}

impl HighlightModel {
    pub fn new(config: HighlighterConfig) -> Self {
        Self {
            mode: ModeController::default(),
            active_color: config.default_color,
            store: HighlightStore::new(),
            debouncer: StabilityDebouncer::new(config.debounce_ms),
            eof: EofPadding::default(),
            active_editor: None,
            palette: Palette::with_overrides(&config.palette),
            config,
        }
    }

    /// Spans of the focused editor's document
    pub fn active_spans(&self) -> &[Span] {
        self.active_editor
            .map(|target| self.store.spans(target.document))
            .unwrap_or(&[])
    }
}

impl Default for HighlightModel {
    fn default() -> Self {
        Self::new(HighlighterConfig::default())
    }
}
