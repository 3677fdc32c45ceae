//! Turnstile: a declarative finite state machine engine with
//! single-step undo/redo.
//!
//! Turnstile tracks an active state against a caller-supplied
//! configuration of states and event rules, applies transitions on
//! demand, and keeps a bounded linear history: a single remembered slot
//! that enables one step of undo and a matching redo. It is meant as an
//! embeddable building block for anything that wants explicit,
//! inspectable state management (UI widgets, protocol handshakes,
//! workflow steps) instead of ad hoc conditionals.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable declaration of states and their
//!   event-to-target rules, shareable between engines
//! - **Engine**: the mutable [`Fsm`] instance holding the active state
//! - **History**: a single-slot memory of the latest change, driving
//!   undo/redo (two consecutive undos oscillate between the last two
//!   states; see [`Fsm::undo`])
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Fsm, MachineConfig};
//!
//! let config: MachineConfig = serde_json::from_str(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "switchOn": "on" } },
//!         "on": { "transitions": { "switchOff": "off" } }
//!     }
//! }"#).unwrap();
//!
//! let mut fsm = Fsm::new(&config);
//! fsm.trigger("switchOn").unwrap();
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//!
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "on");
//! assert!(!fsm.redo());
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::{MachineConfig, MachineConfigBuilder, StateDef, StateTable};
pub use core::{Fsm, FsmError, TransitionRecord};
