//! User command handlers (start, color, clear, stop)

use super::{notices, notify};
use crate::commands::{Cmd, CommandId};
use crate::model::HighlightModel;
use crate::palette::ColorTag;

/// Handle an invoked user command
pub fn update_command(model: &mut HighlightModel, id: CommandId) -> Option<Cmd> {
    match id {
        CommandId::StartHighlighting => {
            model.mode.start();
            tracing::info!(color = %model.active_color, "highlighting started");

            let mut cmds = Vec::new();
            if let Some(target) = model.active_editor {
                if model.config.pad_eof {
                    cmds.push(Cmd::EnsureEofPadding { target });
                }
                cmds.push(Cmd::Render { target });
            }
            cmds.push(notify(model, notices::STARTED));
            Some(Cmd::batch(cmds))
        }

        CommandId::SetHighlightColor => Some(Cmd::PromptColor),

        CommandId::ClearHighlights => {
            let target = model.active_editor?;
            model.store.clear_document(target.document);
            tracing::info!(document = target.document.0, "cleared highlights");

            Some(Cmd::batch(vec![
                Cmd::ClearDecorations {
                    editor: target.editor,
                },
                revert_if_padded(model, target),
                notify(model, notices::CLEARED),
            ]))
        }

        CommandId::StopHighlighting => {
            model.mode.stop();
            model.debouncer.cancel();
            let documents = model.store.document_count();
            model.store.clear_all();
            tracing::info!(documents, "highlighting stopped");

            Some(Cmd::batch(vec![
                Cmd::CancelSelectionCommit,
                Cmd::ClearVisibleEditors,
                notify(model, notices::STOPPED),
            ]))
        }
    }
}

/// Handle the result of the color prompt
pub fn update_color_picked(model: &mut HighlightModel, pick: Option<ColorTag>) -> Option<Cmd> {
    let color = pick?;
    model.active_color = color;
    tracing::info!(%color, "active color changed");
    Some(notify(model, notices::color_set(color.label())))
}

fn revert_if_padded(model: &HighlightModel, target: crate::model::EditorRef) -> Cmd {
    if model.eof.is_padded(target.document) {
        Cmd::RevertEofPadding { target }
    } else {
        Cmd::None
    }
}
