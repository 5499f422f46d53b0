//! Reducer logic for the task list.
//!
//! Every transition is computed by [`TaskReducer::apply`], a pure function
//! of the current list, the action and the id generator. The `Reducer`
//! implementation only swaps the store's value for the one `apply` returns.

use crate::action::{RawAction, TaskAction};
use crate::error::TaskError;
use crate::types::{Task, TaskId, TaskList};
use std::sync::Arc;
use tasklist_core::{
    environment::{IdGenerator, UuidGenerator},
    reducer::Reducer,
};

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Allocates ids for new tasks
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Environment backed by random UUIDs
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for TaskEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the list that follows `state` under `action`
    ///
    /// Misses (delete or toggle of an id not in the list) return `state`
    /// itself, so the result is [`TaskList::ptr_eq`] to the input.
    #[must_use]
    pub fn apply(state: &TaskList, action: TaskAction, env: &TaskEnvironment) -> TaskList {
        match action {
            TaskAction::Add { name } => {
                let id = TaskId::from(env.ids.next_id());
                debug_assert!(!state.contains(&id), "id generator returned a duplicate id");
                tracing::debug!(task_id = %id, len = state.len() + 1, "task added");
                state.appended(Task::new(id, name))
            },
            TaskAction::Delete { id } => match state.without(&id) {
                Some(next) => {
                    tracing::debug!(task_id = %id, len = next.len(), "task deleted");
                    next
                },
                None => {
                    tracing::debug!(task_id = %id, "delete matched no task");
                    state.clone()
                },
            },
            TaskAction::Toggle { id } => match state.with_toggled(&id) {
                Some(next) => {
                    tracing::debug!(
                        task_id = %id,
                        completed = next.get(&id).is_some_and(|task| task.completed),
                        "task toggled"
                    );
                    next
                },
                None => {
                    tracing::debug!(task_id = %id, "toggle matched no task");
                    state.clone()
                },
            },
        }
    }

    /// Decodes a raw action and applies it
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::UnrecognizedAction`] if `raw.kind` is not a task
    /// action. The state is not consulted in that case.
    pub fn apply_raw(
        state: &TaskList,
        raw: RawAction,
        env: &TaskEnvironment,
    ) -> Result<TaskList, TaskError> {
        let action = TaskAction::try_from(raw)?;
        Ok(Self::apply(state, action, env))
    }
}

impl Default for TaskReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskReducer {
    type State = TaskList;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(&self, state: &mut TaskList, action: TaskAction, env: &TaskEnvironment) {
        *state = Self::apply(state, action, env);
    }
}
