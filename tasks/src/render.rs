//! Plain-text rendering of a task list.

use crate::types::TaskList;

/// Renders the list with a completion header, one line per task
///
/// ```
/// use tasklist::render::render;
/// use tasklist::TaskList;
///
/// assert_eq!(render(&TaskList::new(), true), "Task List (0/0 completed)\n  (no tasks)\n");
/// ```
#[must_use]
pub fn render(list: &TaskList, show_ids: bool) -> String {
    let mut out = format!(
        "Task List ({}/{} completed)\n",
        list.completed_count(),
        list.len()
    );

    if list.is_empty() {
        out.push_str("  (no tasks)\n");
        return out;
    }

    for task in list {
        let mark = if task.completed { 'x' } else { ' ' };
        let line = if show_ids {
            format!("  [{mark}] {}  ({})\n", task.name, task.id)
        } else {
            format!("  [{mark}] {}\n", task.name)
        };
        out.push_str(&line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TaskAction;
    use crate::reducer::{TaskEnvironment, TaskReducer};
    use std::sync::Arc;
    use tasklist_testing::SequentialIdGenerator;

    fn sample() -> TaskList {
        let env = TaskEnvironment::new(Arc::new(SequentialIdGenerator::new()));
        [
            TaskAction::add("Buy milk"),
            TaskAction::add("Walk dog"),
            TaskAction::toggle("task-1"),
        ]
        .into_iter()
        .fold(TaskList::new(), |list, action| {
            TaskReducer::apply(&list, action, &env)
        })
    }

    #[test]
    fn test_renders_with_ids() {
        assert_eq!(
            render(&sample(), true),
            "Task List (1/2 completed)\n  [x] Buy milk  (task-1)\n  [ ] Walk dog  (task-2)\n"
        );
    }

    #[test]
    fn test_renders_without_ids() {
        assert_eq!(
            render(&sample(), false),
            "Task List (1/2 completed)\n  [x] Buy milk\n  [ ] Walk dog\n"
        );
    }
}
