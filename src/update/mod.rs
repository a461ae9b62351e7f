//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod command;
mod editor;
mod selection;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::HighlightModel;

#[cfg(debug_assertions)]
use crate::tracing::SpanSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use command::{update_color_picked, update_command};
pub use editor::update_editor;
pub use selection::update_selection;

/// Message texts shown to the user
pub mod notices {
    pub const STARTED: &str = "Highlighting mode started. Select text to toggle highlights.";
    pub const STOPPED: &str = "Stopped highlight mode and cleared all highlights.";
    pub const CLEARED: &str = "Cleared highlights for current file (still in highlight mode).";

    pub fn color_set(label: &str) -> String {
        format!("Highlight color set to {}", label)
    }
}

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut HighlightModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut HighlightModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Command(id) => command::update_command(model, id),
        Msg::ColorPicked(pick) => command::update_color_picked(model, pick),
        Msg::Selection(m) => selection::update_selection(model, m),
        Msg::Editor(m) => editor::update_editor(model, m),
    }
}

/// Wrap a message in a notification command, honoring the config switch
fn notify(model: &HighlightModel, text: impl Into<String>) -> Cmd {
    if model.config.notifications {
        Cmd::ShowMessage(text.into())
    } else {
        Cmd::None
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the focused document's spans before and after the update and
/// logs the difference.
#[cfg(debug_assertions)]
fn update_traced(model: &mut HighlightModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SpanSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SpanSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "spans", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Command(id) => format!("Command::{:?}", id),
        Msg::ColorPicked(pick) => format!("ColorPicked({:?})", pick),
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Editor(m) => format!("Editor::{:?}", m),
    }
}
