//! Command types for the Elm-style architecture
//!
//! `CommandId` names the user-facing commands the host registers;
//! `Cmd` represents side effects that should be performed after an update.

use crate::model::{EditorId, EditorRef};

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a user command exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    StartHighlighting,
    SetHighlightColor,
    ClearHighlights,
    StopHighlighting,
}

/// A command definition for host registration
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Stable identifier the host binds to
    pub name: &'static str,
    pub label: &'static str,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::StartHighlighting,
        name: "extension.startHighlighting",
        label: "Start Highlighting",
    },
    CommandDef {
        id: CommandId::SetHighlightColor,
        name: "extension.setHighlightColor",
        label: "Set Highlight Color",
    },
    CommandDef {
        id: CommandId::ClearHighlights,
        name: "extension.clearHighlights",
        label: "Clear Highlights (Current File)",
    },
    CommandDef {
        id: CommandId::StopHighlighting,
        name: "extension.stopHighlighting",
        label: "Stop Highlighting",
    },
];

impl CommandId {
    /// Look up a command by its host identifier
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.id)
    }

    /// Host identifier for this command
    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|def| def.id == self)
            .map(|def| def.name)
            .unwrap_or("")
    }
}

// ============================================================================
// Side effects
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
    /// Paint the document's spans into the editor
    Render { target: EditorRef },
    /// Remove every highlight decoration from one editor
    ClearDecorations { editor: EditorId },
    /// Clear decorations and revert our EOF blank line in every visible editor
    ClearVisibleEditors,
    /// Start the quiet-interval timer; sends `SelectionMsg::Stable` when it elapses
    ScheduleSelectionCommit { generation: u64, delay_ms: u64 },
    /// Stop the quiet-interval timer
    CancelSelectionCommit,
    /// Append a blank line if a highlight reaches the end of the document
    EnsureEofPadding { target: EditorRef },
    /// Remove the blank line we appended, if it is still there
    RevertEofPadding { target: EditorRef },
    /// Show a transient message
    ShowMessage(String),
    /// Ask the user to pick a color; sends `Msg::ColorPicked`
    PromptColor,
}

impl Cmd {
    /// Create a batch of commands, dropping `Cmd::None` entries
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
