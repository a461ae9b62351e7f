//! Selection handlers - debounce and reconciliation

use crate::commands::Cmd;
use crate::debounce::{DebounceOutcome, SelectionSnapshot};
use crate::messages::SelectionMsg;
use crate::model::HighlightModel;

/// Handle selection-related messages
pub fn update_selection(model: &mut HighlightModel, msg: SelectionMsg) -> Option<Cmd> {
    match msg {
        SelectionMsg::Changed { target, selections } => {
            if !model.mode.is_active() {
                return None;
            }
            let snapshot = SelectionSnapshot::from_selections(target, &selections);
            match model.debouncer.notify(snapshot) {
                DebounceOutcome::Ignored | DebounceOutcome::Unchanged => None,
                DebounceOutcome::Scheduled {
                    generation,
                    delay_ms,
                } => Some(Cmd::ScheduleSelectionCommit {
                    generation,
                    delay_ms,
                }),
            }
        }

        SelectionMsg::Stable { generation } => {
            let snapshot = model.debouncer.fire(generation)?;
            let target = snapshot.target;
            let color = model.active_color;

            let set = model.store.entry(target.document);
            let before = set.len();
            set.apply(snapshot.ranges, color);
            tracing::debug!(
                document = target.document.0,
                key = %snapshot.key,
                %color,
                before,
                after = set.len(),
                "reconciled selection"
            );

            let mut cmds = Vec::with_capacity(2);
            if model.config.pad_eof {
                cmds.push(Cmd::EnsureEofPadding { target });
            }
            cmds.push(Cmd::Render { target });
            Some(Cmd::batch(cmds))
        }
    }
}
