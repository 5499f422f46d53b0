//! Error types for the task list.

use tasklist_runtime::StoreError;
use thiserror::Error;

/// Errors raised while turning input into task actions
///
/// Both variants are fatal to the host: they signal a caller bug or corrupt
/// input, never a valid request that happens to match nothing. Deleting or
/// toggling an unknown id is not an error.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The action kind is not one of `add`, `delete`, `toggle`
    #[error("unrecognized action kind \"{kind}\"")]
    UnrecognizedAction {
        /// The kind as received
        kind: String,
    },

    /// The input line was not a `{kind, payload}` JSON object
    #[error("malformed action: {0}")]
    MalformedAction(#[from] serde_json::Error),
}

/// Errors that end the host dispatch loop
#[derive(Error, Debug)]
pub enum HostError {
    /// Input could not be turned into an action
    #[error(transparent)]
    Action(#[from] TaskError),

    /// The store rejected an action or failed to shut down
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
