//! Core engine types and logic.
//!
//! This module contains the engine itself:
//! - [`Fsm`], the transition/history engine
//! - [`TransitionRecord`], the single remembered slot
//! - The [`FsmError`] taxonomy
//!
//! All operations are synchronous in-memory mutations; a failing call
//! leaves the engine exactly as it was.

mod engine;
mod error;
mod history;

pub use engine::Fsm;
pub use error::FsmError;
pub use history::TransitionRecord;
