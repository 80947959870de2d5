//! Error types surfaced at the engine boundary.

use thiserror::Error;

/// Failure reported by an external bulk-action collaborator.
///
/// Returned to the caller and mirrored into the grid's inline error band.
/// Selection and any open delete confirmation are left untouched on
/// failure so the user can retry without re-selecting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{action} failed: {message}")]
pub struct ActionError {
    /// Label of the failing action ("Delete" or a custom action's label).
    pub action: String,
    /// Collaborator-supplied failure message.
    pub message: String,
}

impl ActionError {
    /// Create an error for the named action.
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}
