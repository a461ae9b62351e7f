//! Scripted sessions against the in-memory surface
//!
//! A script opens a few documents and then plays a list of steps:
//!
//! ```yaml
//! documents:
//!   - id: 1
//!     text: "fn main() {}\n"
//! steps:
//!   - start
//!   - select: [[0, 0, 0, 2]]
//!   - wait: 300
//!   - color: blue
//!   - focus: 1
//!   - clear
//!   - stop
//! ```
//!
//! `select` entries are `[anchor_line, anchor_col, head_line, head_col]`.
//! Time is virtual; only `wait` moves it. A pending selection is committed
//! when the script ends.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::commands::CommandId;
use crate::config::HighlighterConfig;
use crate::model::{DocumentId, HighlightModel, Position, Selection, Span};
use crate::palette::ColorTag;
use crate::runtime::Runtime;
use crate::surface::{EditorSurface, MemorySurface};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub documents: Vec<ScriptDocument>,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptDocument {
    pub id: u64,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Start,
    Stop,
    Clear,
    /// Pick a color through the color command
    Color(String),
    /// Focus the editor showing this document
    Focus(u64),
    /// Report selections in the focused editor
    Select(Vec<[usize; 4]>),
    /// Advance the clock by this many milliseconds
    Wait(u64),
}

/// Final state of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub id: u64,
    pub text: String,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub active: bool,
    pub color: ColorTag,
    pub documents: Vec<DocumentReport>,
    pub messages: Vec<String>,
}

impl Script {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Invalid script: {}", e))
    }
}

/// Play `script` and report the resulting highlights
pub fn replay(script: &Script, config: HighlighterConfig) -> Result<ReplayReport, String> {
    if script.documents.is_empty() {
        return Err("Script opens no documents".to_string());
    }

    let mut surface = MemorySurface::new();
    for doc in &script.documents {
        surface.open(DocumentId(doc.id), &doc.text);
    }
    let mut runtime = Runtime::new(HighlightModel::new(config), surface, Instant::now());

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!(index, ?step, "replaying step");
        match step {
            Step::Start => runtime.run_command(CommandId::StartHighlighting),
            Step::Stop => runtime.run_command(CommandId::StopHighlighting),
            Step::Clear => runtime.run_command(CommandId::ClearHighlights),
            Step::Color(name) => {
                let color = ColorTag::from_label(name)
                    .ok_or_else(|| format!("Step {}: unknown color '{}'", index, name))?;
                runtime.surface_mut().queue_pick(Some(color));
                runtime.run_command(CommandId::SetHighlightColor);
            }
            Step::Focus(id) => {
                let target = runtime
                    .surface_mut()
                    .focus(DocumentId(*id))
                    .ok_or_else(|| format!("Step {}: document {} is not open", index, id))?;
                runtime.active_editor_changed(Some(target));
            }
            Step::Select(coords) => {
                let target = runtime
                    .surface()
                    .active_editor()
                    .ok_or_else(|| format!("Step {}: no focused editor", index))?;
                let selections = coords
                    .iter()
                    .map(|&[al, ac, hl, hc]| {
                        Selection::from_anchor_head(Position::new(al, ac), Position::new(hl, hc))
                    })
                    .collect();
                runtime.selection_changed(target, selections);
            }
            Step::Wait(ms) => runtime.advance_by(Duration::from_millis(*ms)),
        }
    }
    runtime.settle();

    let model = runtime.model();
    let surface = runtime.surface();
    let documents = script
        .documents
        .iter()
        .map(|doc| {
            let id = DocumentId(doc.id);
            DocumentReport {
                id: doc.id,
                text: surface.text(id).unwrap_or_default(),
                spans: model.store.get(id).map(|s| s.sorted()).unwrap_or_default(),
            }
        })
        .collect();

    Ok(ReplayReport {
        active: model.mode.is_active(),
        color: model.active_color,
        documents,
        messages: surface.messages().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let script = Script::from_yaml(
            "documents:\n  - id: 1\n    text: abc\nsteps:\n  - start\n  - select: [[0, 0, 0, 2]]\n  - wait: 300\n  - color: Blue\n",
        )
        .unwrap();
        assert_eq!(
            script.steps,
            vec![
                Step::Start,
                Step::Select(vec![[0, 0, 0, 2]]),
                Step::Wait(300),
                Step::Color("Blue".to_string()),
            ]
        );
    }

    #[test]
    fn test_replay_requires_documents() {
        let script = Script {
            documents: vec![],
            steps: vec![],
        };
        assert!(replay(&script, HighlighterConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_color_reports_step() {
        let script = Script {
            documents: vec![ScriptDocument {
                id: 1,
                text: "abc".into(),
            }],
            steps: vec![Step::Start, Step::Color("purple".into())],
        };
        let err = replay(&script, HighlighterConfig::default()).unwrap_err();
        assert!(err.contains("Step 1"), "{}", err);
    }
}
