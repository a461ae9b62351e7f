//! Single-threaded runtime
//!
//! Owns the model and the editor surface, feeds messages through `update`
//! one at a time and executes the resulting commands. The selection timer is
//! the only deferred work: at most one is armed, and arming a new one replaces
//! the old. Time only moves when the host calls [`Runtime::advance`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::commands::{Cmd, CommandId};
use crate::eof::{self, RevertOutcome};
use crate::messages::{EditorMsg, Msg, SelectionMsg};
use crate::model::{EditorRef, HighlightModel, Selection};
use crate::palette::ColorTag;
use crate::render;
use crate::surface::EditorSurface;
use crate::update::update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SelectionTimer {
    generation: u64,
    deadline: Instant,
}

pub struct Runtime<S: EditorSurface> {
    model: HighlightModel,
    surface: S,
    queue: VecDeque<Msg>,
    timer: Option<SelectionTimer>,
    now: Instant,
}

impl<S: EditorSurface> Runtime<S> {
    /// Register paint styles and pick up the host's focused editor
    pub fn new(model: HighlightModel, mut surface: S, now: Instant) -> Self {
        for color in ColorTag::ALL {
            surface.register_style(color, model.palette.style(color));
        }
        let mut runtime = Self {
            model,
            surface,
            queue: VecDeque::new(),
            timer: None,
            now,
        };
        let active = runtime.surface.active_editor();
        runtime.dispatch(Msg::Editor(EditorMsg::ActiveChanged(active)));
        runtime
    }

    pub fn model(&self) -> &HighlightModel {
        &self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Deadline of the armed selection timer
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    /// Process a message and everything it triggers
    pub fn dispatch(&mut self, msg: Msg) {
        self.queue.push_back(msg);
        while let Some(msg) = self.queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    pub fn run_command(&mut self, id: CommandId) {
        self.dispatch(Msg::Command(id));
    }

    /// Host notification: selections changed in `target`
    pub fn selection_changed(&mut self, target: EditorRef, selections: Vec<Selection>) {
        self.dispatch(Msg::Selection(SelectionMsg::Changed { target, selections }));
    }

    /// Host notification: focus moved to another editor (or none)
    pub fn active_editor_changed(&mut self, target: Option<EditorRef>) {
        self.dispatch(Msg::Editor(EditorMsg::ActiveChanged(target)));
    }

    /// Move the clock forward, firing the selection timer if it is due
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        if let Some(timer) = self.timer {
            if timer.deadline <= self.now {
                self.timer = None;
                self.dispatch(Msg::Selection(SelectionMsg::Stable {
                    generation: timer.generation,
                }));
            }
        }
    }

    pub fn advance_by(&mut self, elapsed: Duration) {
        self.advance(self.now + elapsed);
    }

    /// Run the clock up to the armed timer's deadline, if any
    pub fn settle(&mut self) {
        if let Some(deadline) = self.next_deadline() {
            self.advance(deadline);
        }
    }

    /// Release paint styles and hand the surface back
    pub fn shutdown(mut self) -> S {
        self.timer = None;
        self.surface.dispose_styles();
        self.surface
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Render { target } => {
                render::paint(
                    &mut self.surface,
                    target.editor,
                    self.model.store.get(target.document),
                );
            }
            Cmd::ClearDecorations { editor } => render::clear(&mut self.surface, editor),
            Cmd::ClearVisibleEditors => {
                for target in self.surface.visible_editors() {
                    render::clear(&mut self.surface, target.editor);
                    if self.model.eof.is_padded(target.document) {
                        self.revert_padding(target);
                    }
                }
            }
            Cmd::ScheduleSelectionCommit {
                generation,
                delay_ms,
            } => {
                self.timer = Some(SelectionTimer {
                    generation,
                    deadline: self.now + Duration::from_millis(delay_ms),
                });
            }
            Cmd::CancelSelectionCommit => self.timer = None,
            Cmd::EnsureEofPadding { target } => {
                let spans = self.model.store.spans(target.document);
                match eof::ensure_padding(&mut self.surface, target.document, spans) {
                    Ok(true) => self
                        .queue
                        .push_back(Msg::Editor(EditorMsg::EofPadded(target.document))),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(
                        document = target.document.0,
                        "Failed to append blank line: {}",
                        e
                    ),
                }
            }
            Cmd::RevertEofPadding { target } => self.revert_padding(target),
            Cmd::ShowMessage(text) => self.surface.show_message(&text),
            Cmd::PromptColor => {
                let pick = self.surface.pick_color(&ColorTag::ALL);
                self.queue.push_back(Msg::ColorPicked(pick));
            }
        }
    }

    fn revert_padding(&mut self, target: EditorRef) {
        match eof::revert_padding(&mut self.surface, target.document) {
            Ok(outcome) => {
                if outcome == RevertOutcome::Superseded {
                    tracing::debug!(
                        document = target.document.0,
                        "blank line superseded by content"
                    );
                }
                self.queue
                    .push_back(Msg::Editor(EditorMsg::EofReverted(target.document)));
            }
            Err(e) => tracing::warn!(
                document = target.document.0,
                "Failed to remove blank line: {}",
                e
            ),
        }
    }
}
