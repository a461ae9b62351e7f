//! Editor focus and EOF bookkeeping handlers

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::HighlightModel;

pub fn update_editor(model: &mut HighlightModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::ActiveChanged(target) => {
            model.active_editor = target;
            // Highlights are redrawn on focus even while the mode is off
            target.map(|target| Cmd::Render { target })
        }
        EditorMsg::EofPadded(document) => {
            model.eof.mark(document);
            None
        }
        EditorMsg::EofReverted(document) => {
            model.eof.unmark(document);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, EditorId, EditorRef};

    #[test]
    fn test_focus_change_renders() {
        let mut model = HighlightModel::default();
        let target = EditorRef::new(EditorId(2), DocumentId(5));
        assert_eq!(
            update_editor(&mut model, EditorMsg::ActiveChanged(Some(target))),
            Some(Cmd::Render { target })
        );
        assert_eq!(model.active_editor, Some(target));

        assert_eq!(
            update_editor(&mut model, EditorMsg::ActiveChanged(None)),
            None
        );
        assert_eq!(model.active_editor, None);
    }

    #[test]
    fn test_eof_flags() {
        let mut model = HighlightModel::default();
        update_editor(&mut model, EditorMsg::EofPadded(DocumentId(1)));
        assert!(model.eof.is_padded(DocumentId(1)));
        update_editor(&mut model, EditorMsg::EofReverted(DocumentId(1)));
        assert!(!model.eof.is_padded(DocumentId(1)));
    }
}
