//! Selection stability debouncer
//!
//! A selection is only committed as a highlight once it has stopped changing
//! for the quiet interval. The debouncer is a two-state machine:
//!
//! - `Idle`: nothing scheduled
//! - `Pending`: one snapshot waiting for its timer, identified by a generation
//!
//! A notification with a new key supersedes the pending snapshot and bumps the
//! generation; a notification with the same key leaves the running timer
//! alone. Timer callbacks carry the generation they were scheduled with, so a
//! superseded timer that still fires is discarded.

use crate::model::{EditorRef, Selection, TextRange};

/// Quiet interval before a selection is committed
pub const SELECTION_QUIET_MS: u64 = 300;

/// The non-empty selections of one selection-change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// Editor (and document) the selections were made in
    pub target: EditorRef,
    /// Selected ranges, in event order
    pub ranges: Vec<TextRange>,
    /// Canonical key used for change detection
    pub key: String,
}

impl SelectionSnapshot {
    /// Build a snapshot from host selections, dropping empty ones
    ///
    /// Returns `None` when nothing is selected (cursor only).
    pub fn from_selections(target: EditorRef, selections: &[Selection]) -> Option<Self> {
        let ranges: Vec<TextRange> = selections
            .iter()
            .filter(|sel| !sel.is_empty())
            .map(Selection::range)
            .collect();
        if ranges.is_empty() {
            return None;
        }
        let key = selection_key(&ranges);
        Some(Self {
            target,
            ranges,
            key,
        })
    }

    fn same_selection(&self, other: &SelectionSnapshot) -> bool {
        self.target.document == other.target.document && self.key == other.key
    }
}

/// Canonical key: `start-end` of every range, joined by `;`
pub fn selection_key(ranges: &[TextRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}-{}", r.start, r.end))
        .collect::<Vec<_>>()
        .join(";")
}

/// Debouncer state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DebounceState {
    #[default]
    Idle,
    Pending {
        snapshot: SelectionSnapshot,
        generation: u64,
    },
}

/// What a notification did to the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// Nothing selected; state untouched
    Ignored,
    /// Same selection as the pending one; the running timer keeps going
    Unchanged,
    /// A new timer must be started (any older one is superseded)
    Scheduled { generation: u64, delay_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct StabilityDebouncer {
    state: DebounceState,
    quiet_ms: u64,
    next_generation: u64,
}

impl Default for StabilityDebouncer {
    fn default() -> Self {
        Self::new(SELECTION_QUIET_MS)
    }
}

impl StabilityDebouncer {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            state: DebounceState::Idle,
            quiet_ms,
            next_generation: 1,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Feed one selection-change event
    pub fn notify(&mut self, snapshot: Option<SelectionSnapshot>) -> DebounceOutcome {
        let Some(snapshot) = snapshot else {
            return DebounceOutcome::Ignored;
        };

        if let DebounceState::Pending {
            snapshot: pending, ..
        } = &self.state
        {
            if pending.same_selection(&snapshot) {
                tracing::trace!(key = %snapshot.key, "selection unchanged, timer keeps running");
                return DebounceOutcome::Unchanged;
            }
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        tracing::debug!(
            key = %snapshot.key,
            generation,
            superseded = self.is_pending(),
            "scheduling selection commit"
        );
        self.state = DebounceState::Pending {
            snapshot,
            generation,
        };
        DebounceOutcome::Scheduled {
            generation,
            delay_ms: self.quiet_ms,
        }
    }

    /// Timer for `generation` elapsed
    ///
    /// Returns the snapshot to commit, or `None` if the timer was superseded.
    pub fn fire(&mut self, generation: u64) -> Option<SelectionSnapshot> {
        match std::mem::take(&mut self.state) {
            DebounceState::Pending {
                snapshot,
                generation: live,
            } if live == generation => Some(snapshot),
            other => {
                tracing::debug!(generation, "discarding stale selection timer");
                self.state = other;
                None
            }
        }
    }

    /// Drop any pending snapshot
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentId, EditorId, Position};

    fn target() -> EditorRef {
        EditorRef::new(EditorId(1), DocumentId(1))
    }

    fn snap(ranges: &[(usize, usize, usize, usize)]) -> Option<SelectionSnapshot> {
        let selections: Vec<Selection> = ranges
            .iter()
            .map(|&(al, ac, hl, hc)| {
                Selection::from_anchor_head(Position::new(al, ac), Position::new(hl, hc))
            })
            .collect();
        SelectionSnapshot::from_selections(target(), &selections)
    }

    #[test]
    fn test_selection_key_format() {
        let s = snap(&[(0, 5, 0, 0), (2, 1, 3, 4)]).unwrap();
        assert_eq!(s.key, "0,0-0,5;2,1-3,4");
    }

    #[test]
    fn test_empty_selections_are_ignored() {
        let mut debouncer = StabilityDebouncer::default();
        assert_eq!(snap(&[(1, 1, 1, 1)]), None);
        assert_eq!(debouncer.notify(None), DebounceOutcome::Ignored);
        assert_eq!(debouncer.state(), &DebounceState::Idle);
    }

    #[test]
    fn test_empty_selection_keeps_pending_timer() {
        let mut debouncer = StabilityDebouncer::default();
        let DebounceOutcome::Scheduled { generation, .. } = debouncer.notify(snap(&[(0, 0, 0, 3)]))
        else {
            panic!("expected a scheduled commit");
        };
        assert_eq!(debouncer.notify(None), DebounceOutcome::Ignored);
        assert!(debouncer.fire(generation).is_some());
    }

    #[test]
    fn test_same_key_does_not_restart() {
        let mut debouncer = StabilityDebouncer::new(300);
        let first = debouncer.notify(snap(&[(0, 0, 0, 3)]));
        assert_eq!(
            first,
            DebounceOutcome::Scheduled {
                generation: 1,
                delay_ms: 300
            }
        );
        assert_eq!(
            debouncer.notify(snap(&[(0, 0, 0, 3)])),
            DebounceOutcome::Unchanged
        );
        assert!(debouncer.fire(1).is_some());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_key_change_supersedes_pending() {
        let mut debouncer = StabilityDebouncer::default();
        debouncer.notify(snap(&[(0, 0, 0, 3)]));
        let outcome = debouncer.notify(snap(&[(0, 0, 0, 4)]));
        assert!(matches!(
            outcome,
            DebounceOutcome::Scheduled { generation: 2, .. }
        ));

        assert_eq!(debouncer.fire(1), None);
        assert!(debouncer.is_pending(), "stale timer must not clear state");
        let committed = debouncer.fire(2).unwrap();
        assert_eq!(committed.ranges, vec![TextRange::from_coords(0, 0, 0, 4)]);
    }

    #[test]
    fn test_new_notification_after_fire_schedules_again() {
        let mut debouncer = StabilityDebouncer::default();
        debouncer.notify(snap(&[(0, 0, 0, 3)]));
        debouncer.fire(1);
        assert!(matches!(
            debouncer.notify(snap(&[(0, 0, 0, 3)])),
            DebounceOutcome::Scheduled { generation: 2, .. }
        ));
    }

    #[test]
    fn test_same_key_in_other_document_supersedes() {
        let mut debouncer = StabilityDebouncer::default();
        debouncer.notify(snap(&[(0, 0, 0, 3)]));
        let other = SelectionSnapshot::from_selections(
            EditorRef::new(EditorId(2), DocumentId(2)),
            &[Selection::from_anchor_head(
                Position::new(0, 0),
                Position::new(0, 3),
            )],
        );
        assert!(matches!(
            debouncer.notify(other),
            DebounceOutcome::Scheduled { generation: 2, .. }
        ));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = StabilityDebouncer::default();
        debouncer.notify(snap(&[(0, 0, 0, 3)]));
        debouncer.cancel();
        assert_eq!(debouncer.fire(1), None);
    }
}
