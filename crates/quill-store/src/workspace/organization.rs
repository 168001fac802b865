//! Tasks and project goals.
//!
//! The task collection is re-sorted by due date after every insert and
//! edit. Toggling and deleting leave the order alone.

use quill_core::entities::{GoalDraft, ProjectGoal, Task, TaskDraft};
use quill_core::ordering::{insert_sorted, sort_by_due_date};
use quill_genai::Transport;

use super::{Workspace, replaced, without};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

const TASK: &str = "task";
const GOAL: &str = "goal";

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the draft is invalid or the write fails.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        let task = Task::create(draft)?;
        let mut tasks = self.state.tasks().to_vec();
        insert_sorted(&mut tasks, task.clone());
        self.state.set_tasks(tasks)?;
        Ok(task)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the task is missing, the draft is
    /// invalid, or the write fails.
    pub fn edit_task(&mut self, id: &str, draft: TaskDraft) -> Result<Task, StoreError> {
        let (mut tasks, task) = replaced(self.state.tasks(), TASK, id, |old| old.apply(draft))?;
        sort_by_due_date(&mut tasks);
        self.state.set_tasks(tasks)?;
        Ok(task)
    }

    /// Flip completion. Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the task is missing or the write fails.
    pub fn toggle_task(&mut self, id: &str) -> Result<Task, StoreError> {
        let (tasks, task) = replaced(self.state.tasks(), TASK, id, |old| {
            Ok(Task {
                is_completed: !old.is_completed,
                ..old.clone()
            })
        })?;
        self.state.set_tasks(tasks)?;
        Ok(task)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the task is missing or the write fails.
    pub fn delete_task(&mut self, id: &str) -> Result<(), StoreError> {
        let tasks = without(self.state.tasks(), TASK, id)?;
        self.state.set_tasks(tasks)
    }

    #[must_use]
    pub fn goals(&self) -> &[ProjectGoal] {
        self.state.goals()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the draft is invalid or the write fails.
    pub fn add_goal(&mut self, draft: GoalDraft) -> Result<ProjectGoal, StoreError> {
        let goal = ProjectGoal::create(draft)?;
        let mut goals = self.state.goals().to_vec();
        goals.push(goal.clone());
        self.state.set_goals(goals)?;
        Ok(goal)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the goal is missing, the draft is
    /// invalid, or the write fails.
    pub fn edit_goal(&mut self, id: &str, draft: GoalDraft) -> Result<ProjectGoal, StoreError> {
        let (goals, goal) = replaced(self.state.goals(), GOAL, id, |old| old.apply(draft))?;
        self.state.set_goals(goals)?;
        Ok(goal)
    }

    /// Flip achievement. Returns the updated goal.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the goal is missing or the write fails.
    pub fn toggle_goal(&mut self, id: &str) -> Result<ProjectGoal, StoreError> {
        let (goals, goal) = replaced(self.state.goals(), GOAL, id, |old| {
            Ok(ProjectGoal {
                is_achieved: !old.is_achieved,
                ..old.clone()
            })
        })?;
        self.state.set_goals(goals)?;
        Ok(goal)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the goal is missing or the write fails.
    pub fn delete_goal(&mut self, id: &str) -> Result<(), StoreError> {
        let goals = without(self.state.goals(), GOAL, id)?;
        self.state.set_goals(goals)
    }
}
