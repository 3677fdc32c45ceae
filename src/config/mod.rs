//! Declarative machine configuration.
//!
//! A configuration names an initial state and a table of state
//! definitions, each mapping event identifiers to target states. It is
//! immutable for the lifetime of any engine borrowing it; several
//! engines may share one configuration.
//!
//! Configurations deserialize directly from the canonical JSON shape:
//!
//! ```rust
//! use turnstile::MachineConfig;
//!
//! let config: MachineConfig = serde_json::from_str(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "switchOn": "on" } },
//!         "on": { "transitions": { "switchOff": "off" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.initial, "off");
//! assert!(config.states.contains("on"));
//! ```

mod builder;
mod table;

pub use builder::MachineConfigBuilder;
pub use table::StateTable;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single state's event rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier to target state identifier.
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

/// Caller-supplied machine configuration.
///
/// The engine reads this and never writes it. `initial` must be declared
/// in `states` for the mutating operations to work; the engine does not
/// validate this at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Identifier of the starting state.
    pub initial: String,
    /// Declared states, in declaration order.
    pub states: StateTable,
}

impl MachineConfig {
    /// Start building a configuration fluently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::MachineConfig;
    ///
    /// let config = MachineConfig::builder()
    ///     .initial("red")
    ///     .transition("red", "go", "green")
    ///     .transition("green", "caution", "yellow")
    ///     .transition("yellow", "stop", "red")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.states.len(), 3);
    /// ```
    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_canonical_shape() {
        let config: MachineConfig = serde_json::from_str(
            r#"{
                "initial": "draft",
                "states": {
                    "draft": { "transitions": { "submit": "review" } },
                    "review": { "transitions": { "approve": "published", "reject": "draft" } },
                    "published": { "transitions": {} }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "draft");
        let names: Vec<&str> = config.states.names().collect();
        assert_eq!(names, vec!["draft", "review", "published"]);
        assert_eq!(
            config.states.get("review").unwrap().transitions.get("reject"),
            Some(&"draft".to_string())
        );
    }

    #[test]
    fn missing_transitions_key_defaults_to_empty() {
        let config: MachineConfig = serde_json::from_str(
            r#"{ "initial": "done", "states": { "done": {} } }"#,
        )
        .unwrap();

        assert!(config.states.get("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = MachineConfig::builder()
            .initial("off")
            .transition("off", "switchOn", "on")
            .transition("on", "switchOff", "off")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
