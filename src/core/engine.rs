//! The FSM engine: state tracking, event dispatch, undo/redo.

use crate::config::MachineConfig;
use crate::core::error::FsmError;
use crate::core::history::{History, TransitionRecord};

/// A finite state machine driven by a declarative [`MachineConfig`].
///
/// The engine borrows its configuration and never mutates it, so several
/// engines can share one config. All operations are synchronous in-memory
/// field updates: each call either fully completes or fails leaving every
/// field untouched. The engine holds no locks; embed one instance per
/// logical owner, or serialize access externally.
///
/// History is a single slot, not a stack: only the most recent change is
/// remembered, and undoing it overwrites the slot with the undo itself.
/// See [`Fsm::undo`] for the oscillation behavior this implies.
///
/// # Example
///
/// ```rust
/// use turnstile::{Fsm, MachineConfig};
///
/// let config = MachineConfig::builder()
///     .initial("off")
///     .transition("off", "switchOn", "on")
///     .transition("on", "switchOff", "off")
///     .build()
///     .unwrap();
///
/// let mut fsm = Fsm::new(&config);
/// assert_eq!(fsm.state(), "off");
///
/// fsm.trigger("switchOn").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
/// ```
pub struct Fsm<'a> {
    config: &'a MachineConfig,
    current: String,
    slot: Option<TransitionRecord>,
    history: History,
}

impl<'a> Fsm<'a> {
    /// Create an engine positioned at the configuration's initial state.
    ///
    /// The configuration must declare `initial` among its states for the
    /// mutating operations to succeed; this is not validated here.
    pub fn new(config: &'a MachineConfig) -> Self {
        Self {
            config,
            current: config.initial.clone(),
            slot: None,
            history: History::new(),
        }
    }

    /// The active state. Never fails, no side effects.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The state that was active immediately before the last change, or
    /// `None` before any change has occurred (and after
    /// [`Fsm::clear_history`]).
    pub fn previous_state(&self) -> Option<&str> {
        self.slot.as_ref().map(|record| record.from.as_str())
    }

    /// The most recent state change, with its timestamp. This is the
    /// engine's entire memory of the past.
    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.slot.as_ref()
    }

    /// The configuration this engine runs on.
    pub fn config(&self) -> &MachineConfig {
        self.config
    }

    /// Net state changes since creation or the last reset. Undo is
    /// available only while this is non-zero.
    pub fn change_count(&self) -> usize {
        self.history.changes()
    }

    /// Consecutive undos that a redo chain can still reverse.
    pub fn undo_depth(&self) -> usize {
        self.history.undone()
    }

    /// Whether [`Fsm::undo`] would succeed right now.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() && self.slot.is_some()
    }

    /// Whether [`Fsm::redo`] would succeed right now.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && self.slot.is_some()
    }

    /// All declared state identifiers, in declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{Fsm, MachineConfig};
    ///
    /// let config = MachineConfig::builder()
    ///     .initial("draft")
    ///     .state("draft")
    ///     .state("review")
    ///     .state("published")
    ///     .build()
    ///     .unwrap();
    ///
    /// let fsm = Fsm::new(&config);
    /// assert_eq!(fsm.states(), vec!["draft", "review", "published"]);
    /// ```
    pub fn states(&self) -> Vec<&str> {
        self.config.states.names().collect()
    }

    /// The states whose transition table defines `event`, in declaration
    /// order. Empty if no state handles the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(name, _)| name)
            .collect()
    }

    /// Move unconditionally to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not a declared
    /// state, leaving the engine untouched. On success the previous-state
    /// slot is overwritten with this change, the change count grows by
    /// one, and any armed redo is invalidated.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        self.swap_to(target)?;
        self.history.record_change();
        Ok(())
    }

    /// Dispatch `event` against the current state's transition table.
    ///
    /// Delegates to [`Fsm::change_state`] with the mapped target. Fails
    /// with [`FsmError::InvalidTransition`] if the current state does not
    /// handle the event, leaving the engine untouched.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let config = self.config;
        let target = config
            .states
            .get(&self.current)
            .and_then(|def| def.transitions.get(event))
            .ok_or_else(|| FsmError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?;
        self.change_state(target)
    }

    /// Return to the initial state and zero the change count.
    ///
    /// The previous-state slot keeps the pre-reset state, but with the
    /// change count at zero it is not reachable through [`Fsm::undo`].
    /// Fails with [`FsmError::InvalidState`] if the configured initial
    /// state is undeclared (a broken configuration), leaving the engine
    /// untouched.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let initial = self.config.initial.clone();
        self.change_state(&initial)?;
        self.history.zero_changes();
        Ok(())
    }

    /// Revert the most recent state change.
    ///
    /// Returns `false` with no side effects when nothing is eligible:
    /// before any change, after a reset, or once the available changes
    /// have been unwound. Returns `true` after swapping back.
    ///
    /// The history is a single slot, and the undo itself overwrites it:
    /// the slot then remembers the undo, not the step before. Two
    /// consecutive undos therefore oscillate between the last two states
    /// rather than walking further back. This is the intended semantics
    /// of the single-slot design, not a defect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{Fsm, MachineConfig};
    ///
    /// let config = MachineConfig::builder()
    ///     .initial("a")
    ///     .transition("a", "next", "b")
    ///     .transition("b", "next", "c")
    ///     .state("c")
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut fsm = Fsm::new(&config);
    /// fsm.trigger("next").unwrap();
    /// fsm.trigger("next").unwrap();
    /// assert_eq!(fsm.state(), "c");
    ///
    /// assert!(fsm.undo());
    /// assert_eq!(fsm.state(), "b");
    ///
    /// // The slot now remembers the undo itself, so a second undo
    /// // oscillates forward to "c" instead of reaching "a".
    /// assert!(fsm.undo());
    /// assert_eq!(fsm.state(), "c");
    /// ```
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let Some(prev) = self.previous_state().map(String::from) else {
            return false;
        };
        if self.swap_to(&prev).is_err() {
            return false;
        }
        self.history.record_undo();
        true
    }

    /// Replay the change reversed by the last undo.
    ///
    /// Returns `false` with no side effects unless the last operation was
    /// an undo (any forward change disarms redo). Returns `true` after
    /// swapping forward again; redo stays available while earlier undos
    /// remain unredone.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let Some(prev) = self.previous_state().map(String::from) else {
            return false;
        };
        if self.swap_to(&prev).is_err() {
            return false;
        }
        self.history.record_redo();
        true
    }

    /// Forget all history: back to the initial state, previous-state slot
    /// unset, change count and undo depth zeroed.
    ///
    /// Any armed redo is also dropped. With the slot unset there is no
    /// state a stale redo could replay into, so `can_redo` reporting true
    /// here would be a lie.
    pub fn clear_history(&mut self) {
        self.current = self.config.initial.clone();
        self.slot = None;
        self.history.clear();
    }

    /// Move to `target` and overwrite the slot, without recording anything
    /// in the undo/redo bookkeeping.
    fn swap_to(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.states.contains(target) {
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }
        self.slot = Some(TransitionRecord::new(&self.current, target));
        self.current = target.to_string();
        Ok(())
    }
}
