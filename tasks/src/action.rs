//! Task actions and their wire representation.
//!
//! On the wire an action is `{"kind": "...", "payload": "..."}` where the
//! payload is the new task's name for `add` and a task id otherwise. The
//! plain-text form used by the interactive host is `<kind> <payload>`.

use crate::error::TaskError;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use tasklist_macros::Action;

/// Everything that can happen to a task list
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a new task with this name
    Add {
        /// Display name, taken verbatim
        name: String,
    },

    /// Remove the task with this id
    Delete {
        /// Task to remove
        id: TaskId,
    },

    /// Flip the completion flag of the task with this id
    Toggle {
        /// Task to toggle
        id: TaskId,
    },
}

impl TaskAction {
    /// Shorthand for [`TaskAction::Add`]
    #[must_use]
    pub fn add(name: impl Into<String>) -> Self {
        Self::Add { name: name.into() }
    }

    /// Shorthand for [`TaskAction::Delete`]
    #[must_use]
    pub fn delete(id: impl Into<TaskId>) -> Self {
        Self::Delete { id: id.into() }
    }

    /// Shorthand for [`TaskAction::Toggle`]
    #[must_use]
    pub fn toggle(id: impl Into<TaskId>) -> Self {
        Self::Toggle { id: id.into() }
    }
}

/// Untyped action as received at the dispatch boundary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action kind
    pub kind: String,
    /// Name for `add`, task id for `delete`/`toggle`
    pub payload: String,
}

impl RawAction {
    /// Creates a raw action
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: payload.into(),
        }
    }
}

impl TryFrom<RawAction> for TaskAction {
    type Error = TaskError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "add" => Ok(Self::Add { name: raw.payload }),
            "delete" => Ok(Self::Delete {
                id: TaskId::from(raw.payload),
            }),
            "toggle" => Ok(Self::Toggle {
                id: TaskId::from(raw.payload),
            }),
            _ => Err(TaskError::UnrecognizedAction { kind: raw.kind }),
        }
    }
}

impl From<TaskAction> for RawAction {
    fn from(action: TaskAction) -> Self {
        let kind = action.kind();
        let payload = match action {
            TaskAction::Add { name } => name,
            TaskAction::Delete { id } | TaskAction::Toggle { id } => id.to_string(),
        };
        Self::new(kind, payload)
    }
}

/// Decodes one JSON action object
///
/// # Errors
///
/// [`TaskError::MalformedAction`] if `input` is not a `{kind, payload}`
/// object with string fields, [`TaskError::UnrecognizedAction`] if the kind
/// is unknown.
pub fn decode_json(input: &str) -> Result<TaskAction, TaskError> {
    let raw: RawAction = serde_json::from_str(input)?;
    TaskAction::try_from(raw)
}

/// Encodes an action as a JSON object
///
/// # Errors
///
/// [`TaskError::MalformedAction`] if serialization fails.
pub fn encode_json(action: &TaskAction) -> Result<String, TaskError> {
    Ok(serde_json::to_string(&RawAction::from(action.clone()))?)
}

/// Splits a plain-text command into kind and payload
///
/// The first word is the kind; everything after the single space that
/// follows it is the payload, verbatim. A bare kind has an empty payload.
#[must_use]
pub fn parse_command(line: &str) -> RawAction {
    let line = line.trim_start();
    match line.split_once(' ') {
        Some((kind, payload)) => RawAction::new(kind, payload),
        None => RawAction::new(line, ""),
    }
}
