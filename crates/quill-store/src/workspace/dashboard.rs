//! Read-only overview of the workspace.

use quill_core::entities::{Article, ProjectGoal, Task};
use quill_genai::Transport;
use serde::Serialize;

use super::Workspace;
use crate::kv::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// First articles in collection order.
    pub recent_articles: Vec<Article>,
    /// First incomplete tasks in collection (due-date) order.
    pub upcoming_tasks: Vec<Task>,
    /// First goals not yet achieved.
    pub active_goals: Vec<ProjectGoal>,
    pub article_count: usize,
    pub reference_count: usize,
    pub pending_task_count: usize,
    pub active_goal_count: usize,
}

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    /// Build the overview, listing at most `recent_limit` of each kind.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let limit = self.recent_limit;
        let pending = || self.state.tasks().iter().filter(|t| !t.is_completed);
        let active = || self.state.goals().iter().filter(|g| !g.is_achieved);

        Dashboard {
            recent_articles: self.state.articles().iter().take(limit).cloned().collect(),
            upcoming_tasks: pending().take(limit).cloned().collect(),
            active_goals: active().take(limit).cloned().collect(),
            article_count: self.state.articles().len(),
            reference_count: self.state.references().len(),
            pending_task_count: pending().count(),
            active_goal_count: active().count(),
        }
    }
}
