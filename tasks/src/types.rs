//! Domain types for the task list.
//!
//! A [`TaskList`] is an immutable value: transitions build a new list and
//! leave every earlier value untouched, so holders of an older list can
//! compare it against the current one to decide whether anything changed.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque identifier of a task
///
/// Allocated by the reducer when a task is added; clients only ever echo an
/// id they were given back in `delete`/`toggle` actions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an id string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,
    /// Free-form display name, may be empty
    pub name: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub const fn new(id: TaskId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }

    /// Returns a copy with `completed` negated
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Ordered list of tasks, in insertion order
///
/// Cloning is cheap (reference-counted). Equality compares content; use
/// [`TaskList::ptr_eq`] to ask whether two values are the same list value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskList {
    tasks: Arc<[Task]>,
}

impl TaskList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The tasks as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Index of a task by ID
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    /// The most recently added task still in the list
    #[must_use]
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Number of tasks not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Whether both values are the same list value
    ///
    /// Transitions that change nothing hand back the list they were given,
    /// so `ptr_eq` doubles as change detection.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    /// New list with `task` appended
    pub(crate) fn appended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        Self {
            tasks: tasks.into(),
        }
    }

    /// New list without any task whose id is `id`, or `None` if none matched
    pub(crate) fn without(&self, id: &TaskId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| &task.id != id)
            .cloned()
            .collect();
        Some(Self {
            tasks: tasks.into(),
        })
    }

    /// New list with the task `id` toggled in place, or `None` if none matched
    pub(crate) fn with_toggled(&self, id: &TaskId) -> Option<Self> {
        let index = self.position(id)?;
        let mut tasks = self.tasks.to_vec();
        tasks[index] = tasks[index].toggled();
        Some(Self {
            tasks: tasks.into(),
        })
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, name: &str) -> Task {
        Task::new(TaskId::new(id), name.to_string())
    }

    #[test]
    fn test_task_id_display() {
        let id = TaskId::new("task-7");
        assert_eq!(format!("{id}"), "task-7");
        assert_eq!(id.as_str(), "task-7");
    }

    #[test]
    fn test_task_new_is_not_completed() {
        let item = task("a", "Test task");
        assert_eq!(item.name, "Test task");
        assert!(!item.completed);
    }

    #[test]
    fn test_task_toggled_flips_only_completed() {
        let item = task("a", "Test");
        let flipped = item.toggled();
        assert!(flipped.completed);
        assert_eq!(flipped.id, item.id);
        assert_eq!(flipped.name, item.name);
        assert_eq!(flipped.toggled(), item);
    }

    #[test]
    fn test_list_counts() {
        let list = TaskList::new()
            .appended(task("a", "one"))
            .appended(task("b", "two"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.completed_count(), 0);
        assert_eq!(list.active_count(), 2);

        let list = list.with_toggled(&TaskId::new("b")).unwrap_or_default();
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.active_count(), 1);
    }

    #[test]
    fn test_appended_leaves_original_untouched() {
        let before = TaskList::new().appended(task("a", "one"));
        let after = before.appended(task("b", "two"));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert!(!before.ptr_eq(&after));
        assert_eq!(after.last().map(|t| t.name.as_str()), Some("two"));
    }

    #[test]
    fn test_without_missing_id_is_none() {
        let list = TaskList::new().appended(task("a", "one"));
        assert!(list.without(&TaskId::new("zzz")).is_none());
        assert!(list.with_toggled(&TaskId::new("zzz")).is_none());
    }

    #[test]
    fn test_lookups() {
        let list = TaskList::new()
            .appended(task("a", "one"))
            .appended(task("b", "two"));
        let b = TaskId::new("b");
        assert_eq!(list.position(&b), Some(1));
        assert!(list.contains(&b));
        assert_eq!(list.get(&b).map(|t| t.name.as_str()), Some("two"));
        assert_eq!((&list).into_iter().count(), 2);
    }

    #[test]
    fn test_clones_share_storage() {
        let list = TaskList::new().appended(task("a", "one"));
        assert!(list.ptr_eq(&list.clone()));
        assert_eq!(TaskList::new(), TaskList::default());
    }
}
