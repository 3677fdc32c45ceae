//! Fluent construction of machine configurations.

use crate::config::{MachineConfig, StateTable};
use crate::core::FsmError;

/// Builder for [`MachineConfig`] with a fluent API.
///
/// States are kept in the order they are first mentioned, which is the
/// order query operations later report them in.
///
/// # Example
///
/// ```rust
/// use turnstile::MachineConfig;
///
/// let config = MachineConfig::builder()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "finish", "idle")
///     .state("stalled")
///     .build()
///     .unwrap();
///
/// let names: Vec<&str> = config.states.names().collect();
/// assert_eq!(names, vec!["idle", "running", "stalled"]);
/// ```
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: StateTable::new(),
        }
    }

    /// Set the starting state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with no transitions unless some are added later.
    /// Redeclaring an existing state is a no-op.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name);
        self
    }

    /// Add an event rule, declaring `from` if it is new. The target state
    /// is not implicitly declared; mention it with [`Self::state`] or its
    /// own transitions.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    ///
    /// Fails with [`FsmError::MissingConfig`] when no initial state was
    /// set; whether `initial` is actually declared among the states is
    /// the caller's responsibility, as at engine construction.
    pub fn build(self) -> Result<MachineConfig, FsmError> {
        let initial = self.initial.ok_or(FsmError::MissingConfig)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for MachineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
