//! Drag-and-drop scaffold for widget reordering.
//!
//! STATUS
//! ======
//! This is the contract only. The controller tracks the drag lifecycle and
//! reports the raw source/target pair on drop; what a drop *means* (insert
//! before or after, how indices shift, cross-container moves) is an open
//! requirement and deliberately not defined here.

/// What is being dragged: a widget by its position in the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub widget_index: usize,
}

/// Drag lifecycle events produced by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start(DragPayload),
    EnterTarget { widget_index: usize },
    LeaveTarget,
    Drop,
    Cancel,
}

/// Current drag phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        payload: DragPayload,
        over: Option<usize>,
    },
}

/// Source/target pair reported on drop. Interpreting it is the caller's
/// problem — no reorder semantics are implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    pub from: usize,
    pub to: usize,
}

/// Tracks one drag interaction at a time.
#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Apply one event. Returns a [`DropReport`] only for a drop that landed
    /// on a target.
    pub fn apply(&mut self, event: DragEvent) -> Option<DropReport> {
        match (self.phase, event) {
            (DragPhase::Idle, DragEvent::Start(payload)) => {
                self.phase = DragPhase::Dragging { payload, over: None };
                None
            }
            (DragPhase::Dragging { payload, .. }, DragEvent::EnterTarget { widget_index }) => {
                self.phase = DragPhase::Dragging { payload, over: Some(widget_index) };
                None
            }
            (DragPhase::Dragging { payload, .. }, DragEvent::LeaveTarget) => {
                self.phase = DragPhase::Dragging { payload, over: None };
                None
            }
            (DragPhase::Dragging { payload, over }, DragEvent::Drop) => {
                self.phase = DragPhase::Idle;
                over.map(|to| DropReport { from: payload.widget_index, to })
            }
            (_, DragEvent::Cancel) => {
                self.phase = DragPhase::Idle;
                None
            }
            // Out-of-order events (e.g. Drop while idle) are ignored.
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_cancel_round_trips_to_idle() {
        let mut dnd = DragController::new();
        dnd.apply(DragEvent::Start(DragPayload { widget_index: 2 }));
        assert!(matches!(dnd.phase(), DragPhase::Dragging { .. }));

        assert!(dnd.apply(DragEvent::Cancel).is_none());
        assert_eq!(dnd.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_on_target_reports_pair() {
        let mut dnd = DragController::new();
        dnd.apply(DragEvent::Start(DragPayload { widget_index: 0 }));
        dnd.apply(DragEvent::EnterTarget { widget_index: 3 });

        let report = dnd.apply(DragEvent::Drop).unwrap();
        assert_eq!(report, DropReport { from: 0, to: 3 });
        assert_eq!(dnd.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_without_target_reports_nothing() {
        let mut dnd = DragController::new();
        dnd.apply(DragEvent::Start(DragPayload { widget_index: 1 }));
        dnd.apply(DragEvent::EnterTarget { widget_index: 2 });
        dnd.apply(DragEvent::LeaveTarget);

        assert!(dnd.apply(DragEvent::Drop).is_none());
        assert_eq!(dnd.phase(), DragPhase::Idle);
    }

    #[test]
    fn events_while_idle_are_ignored() {
        let mut dnd = DragController::new();
        assert!(dnd.apply(DragEvent::Drop).is_none());
        assert!(dnd.apply(DragEvent::EnterTarget { widget_index: 5 }).is_none());
        assert_eq!(dnd.phase(), DragPhase::Idle);
    }
}
