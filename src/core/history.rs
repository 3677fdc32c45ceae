//! Single-slot transition history and undo/redo bookkeeping.
//!
//! The engine remembers exactly one prior step: the most recent state
//! change. Undo eligibility and redo arming are tracked separately as an
//! explicit [`History`] phase, so no operation ever needs to reverse an
//! increment it just made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of the most recent state change.
///
/// This is the engine's entire memory of the past: a single slot holding
/// the state that was left, the state that was entered, and when. Undo
/// swaps back to `from`; a second consecutive undo swaps forward again,
/// because the slot itself was overwritten by the first undo.
///
/// # Example
///
/// ```rust
/// use turnstile::{Fsm, MachineConfig};
///
/// let config = MachineConfig::builder()
///     .initial("idle")
///     .transition("idle", "start", "busy")
///     .state("busy")
///     .build()
///     .unwrap();
///
/// let mut fsm = Fsm::new(&config);
/// assert!(fsm.last_transition().is_none());
///
/// fsm.trigger("start").unwrap();
/// let record = fsm.last_transition().unwrap();
/// assert_eq!(record.from, "idle");
/// assert_eq!(record.to, "busy");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was left.
    pub from: String,
    /// The state that was entered.
    pub to: String,
    /// When the change occurred.
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub(crate) fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Undo/redo bookkeeping as an explicit phase.
///
/// `changes` counts forward changes still eligible for undo; `undone`
/// counts reversions a redo chain can still work through. The variant
/// tag carries redo arming: redo is possible only in `Undone`, entered
/// by an undo and left by any forward change. Both counters survive
/// across phases; in particular `undone` outlives a reset or an
/// interleaved forward change, which lets a later redo chain pick the
/// count back up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum History {
    /// Nothing on record; neither undo nor redo is available.
    Empty,
    /// Forward changes on record; redo is disarmed.
    Changed { changes: usize, undone: usize },
    /// The last operation was an undo; redo is armed.
    Undone { changes: usize, undone: usize },
}

impl History {
    pub(crate) fn new() -> Self {
        History::Empty
    }

    /// Forward changes still eligible for undo.
    pub(crate) fn changes(&self) -> usize {
        match self {
            History::Empty => 0,
            History::Changed { changes, .. } | History::Undone { changes, .. } => *changes,
        }
    }

    /// Reversions still pending redo.
    pub(crate) fn undone(&self) -> usize {
        match self {
            History::Empty => 0,
            History::Changed { undone, .. } | History::Undone { undone, .. } => *undone,
        }
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.changes() > 0
    }

    pub(crate) fn can_redo(&self) -> bool {
        matches!(self, History::Undone { .. })
    }

    /// A forward change: one more step becomes eligible for undo, and any
    /// armed redo is invalidated.
    pub(crate) fn record_change(&mut self) {
        *self = History::Changed {
            changes: self.changes() + 1,
            undone: self.undone(),
        };
    }

    /// An undo: the reversed change leaves the eligible pool and joins the
    /// redoable pool. Callers must check [`History::can_undo`] first.
    pub(crate) fn record_undo(&mut self) {
        debug_assert!(self.can_undo());
        *self = History::Undone {
            changes: self.changes() - 1,
            undone: self.undone() + 1,
        };
    }

    /// A redo: the replayed change is eligible for undo again. Redo stays
    /// armed only while earlier reversions remain unredone. Callers must
    /// check [`History::can_redo`] first.
    pub(crate) fn record_redo(&mut self) {
        debug_assert!(self.can_redo());
        let changes = self.changes() + 1;
        let undone = self.undone() - 1;
        *self = if undone > 0 {
            History::Undone { changes, undone }
        } else {
            History::Changed { changes, undone }
        };
    }

    /// Zero the change counter without touching the redo side. Reset uses
    /// this to make everything before the reset ineligible for undo.
    pub(crate) fn zero_changes(&mut self) {
        *self = match *self {
            History::Empty => History::Empty,
            History::Changed { undone: 0, .. } => History::Empty,
            History::Changed { undone, .. } => History::Changed { changes: 0, undone },
            History::Undone { undone, .. } => History::Undone { changes: 0, undone },
        };
    }

    /// Forget everything, including any armed redo.
    pub(crate) fn clear(&mut self) {
        *self = History::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_has_nothing_to_undo_or_redo() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.changes(), 0);
        assert_eq!(history.undone(), 0);
    }

    #[test]
    fn change_enables_undo_but_not_redo() {
        let mut history = History::new();
        history.record_change();

        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.changes(), 1);
    }

    #[test]
    fn undo_arms_redo() {
        let mut history = History::new();
        history.record_change();
        history.record_undo();

        assert!(!history.can_undo());
        assert!(history.can_redo());
        assert_eq!(history.changes(), 0);
        assert_eq!(history.undone(), 1);
    }

    #[test]
    fn redo_disarms_when_no_reversions_remain() {
        let mut history = History::new();
        history.record_change();
        history.record_undo();
        history.record_redo();

        assert!(!history.can_redo());
        assert!(history.can_undo());
        assert_eq!(history.changes(), 1);
        assert_eq!(history.undone(), 0);
    }

    #[test]
    fn redo_stays_armed_while_reversions_remain() {
        let mut history = History::new();
        history.record_change();
        history.record_change();
        history.record_undo();
        history.record_undo();

        assert_eq!(history.undone(), 2);

        history.record_redo();
        assert!(history.can_redo());
        assert_eq!(history.undone(), 1);

        history.record_redo();
        assert!(!history.can_redo());
        assert_eq!(history.undone(), 0);
        assert_eq!(history.changes(), 2);
    }

    #[test]
    fn forward_change_disarms_redo_but_keeps_undone_count() {
        let mut history = History::new();
        history.record_change();
        history.record_undo();
        history.record_change();

        assert!(!history.can_redo());
        assert_eq!(history.undone(), 1);
        assert_eq!(history.changes(), 1);
    }

    #[test]
    fn zero_changes_preserves_undone_count() {
        let mut history = History::new();
        history.record_change();
        history.record_undo();
        history.record_change();
        history.zero_changes();

        assert!(!history.can_undo());
        assert_eq!(history.undone(), 1);
    }

    #[test]
    fn zero_changes_on_untouched_history_stays_empty() {
        let mut history = History::new();
        history.zero_changes();
        assert_eq!(history, History::Empty);
    }

    #[test]
    fn clear_forgets_armed_redo() {
        let mut history = History::new();
        history.record_change();
        history.record_undo();
        assert!(history.can_redo());

        history.clear();
        assert_eq!(history, History::Empty);
        assert!(!history.can_redo());
    }

    #[test]
    fn transition_record_captures_endpoints() {
        let record = TransitionRecord::new("draft", "review");
        assert_eq!(record.from, "draft");
        assert_eq!(record.to, "review");
    }

    #[test]
    fn transition_record_serializes() {
        let record = TransitionRecord::new("a", "b");
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.from, deserialized.from);
        assert_eq!(record.to, deserialized.to);
        assert_eq!(record.timestamp, deserialized.timestamp);
    }
}
