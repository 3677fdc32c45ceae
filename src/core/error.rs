//! Error taxonomy for configuration and engine operations.

use thiserror::Error;

/// Errors surfaced by configuration construction and engine operations.
///
/// Every variant is unrecoverable by the engine itself: the failing call
/// returns the error to the caller and leaves all internal fields
/// unchanged. "Nothing to undo/redo" is an expected outcome rather than
/// an error, so `undo` and `redo` report it through their `bool` return
/// value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    #[error("No configuration supplied. Call .initial(state) before .build()")]
    MissingConfig,

    #[error("Unknown state '{state}'. Targets must be declared in the configuration")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
