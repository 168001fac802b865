//! Task collection ordering.
//!
//! Tasks with a due date are ordered ascending among the slots dated tasks
//! occupy. Undated tasks never move and never take part in a comparison. Equal
//! dates keep their relative order.
//!
//! ```text
//! [A(06-01), B(-), C(01-01)]  →  [C(01-01), B(-), A(06-01)]
//! ```

use crate::entities::Task;

/// Re-sort `tasks` in place by due date, leaving undated tasks where they are.
pub fn sort_by_due_date(tasks: &mut [Task]) {
    let slots: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter_map(|(index, task)| task.due_date.map(|_| index))
        .collect();

    let mut dated: Vec<Task> = slots.iter().map(|&index| tasks[index].clone()).collect();
    // Stable: equal dates keep insertion order.
    dated.sort_by_key(|task| task.due_date);

    for (slot, task) in slots.into_iter().zip(dated) {
        tasks[slot] = task;
    }
}

/// Append a task and restore the ordering.
pub fn insert_sorted(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
    sort_by_due_date(tasks);
}
