//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while validating an action list.
///
/// These are synchronous, deterministic build-time failures; there is nothing
/// to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The caller supplied no actions at all.
    #[error("action list is empty")]
    EmptyActionList,

    /// More than one action is marked as the default choice.
    #[error("ambiguous default: actions {first} and {second} are both marked default")]
    AmbiguousDefault { first: usize, second: usize },
}

/// Errors raised by the presentation controller at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The descriptor cannot be presented as-is. A dialog with zero tappable
    /// options must refuse to show rather than show-and-hang.
    #[error("invalid descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// A selection index outside the rendered action list. This is a
    /// programming error in the caller, not a user input to swallow.
    #[error("action index {index} out of range for {len} actions")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised on the suspend/resume path.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Only presentations still waiting for a choice can be suspended.
    #[error("presentation is not in a suspendable phase")]
    NotSuspendable,

    /// The host had no persisted state for this presentation.
    #[error("no persisted state for presentation {id}")]
    Missing { id: String },

    /// The persisted blob failed to decode.
    #[error("persisted state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Umbrella error for dialog operations.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Action-list validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Controller contract violation.
    #[error("controller error: {0}")]
    Controller(#[from] ControllerError),

    /// Suspend/resume failed.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Result type for dialog operations.
pub type DialogResult<T> = Result<T, DialogError>;
