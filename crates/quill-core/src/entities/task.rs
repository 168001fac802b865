use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::non_blank;
use crate::errors::{CoreError, require_text};
use crate::ids::{PREFIX_TASK, generate_id};

/// An actionable to-do item, optionally due on a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Undated tasks written by earlier versions carry `"dueDate": ""`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => date.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// User-supplied task fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub project_id: Option<String>,
}

impl Task {
    /// New tasks always start incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is blank.
    pub fn create(draft: TaskDraft) -> Result<Self, CoreError> {
        require_text("description", &draft.description)?;
        Ok(Self {
            id: generate_id(PREFIX_TASK),
            description: draft.description,
            due_date: draft.due_date,
            is_completed: false,
            project_id: non_blank(draft.project_id),
        })
    }

    /// Replace the editable fields, keeping `id` and `is_completed`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is blank.
    pub fn apply(&self, draft: TaskDraft) -> Result<Self, CoreError> {
        require_text("description", &draft.description)?;
        Ok(Self {
            description: draft.description,
            due_date: draft.due_date,
            project_id: non_blank(draft.project_id),
            ..self.clone()
        })
    }

    #[must_use]
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            description: self.description.clone(),
            due_date: self.due_date,
            project_id: self.project_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_is_iso_on_disk() {
        let task = Task::create(TaskDraft {
            description: "write intro".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            project_id: None,
        })
        .unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2024-01-01");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn blank_due_date_reads_as_undated() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id":"1","description":"keep me","dueDate":"","isCompleted":false},
                {"id":"2","description":"dated","dueDate":"2024-01-01","isCompleted":true}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks[0].due_date, None);
        assert_eq!(tasks[1].due_date, NaiveDate::from_ymd_opt(2024, 1, 1));

        let json = serde_json::to_value(&tasks[0]).unwrap();
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let parsed = serde_json::from_str::<Task>(r#"{"id":"1","description":"x","dueDate":"soon"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn apply_preserves_completion() {
        let mut task = Task::create(TaskDraft {
            description: "a".into(),
            ..Default::default()
        })
        .unwrap();
        task.is_completed = true;
        let edited = task
            .apply(TaskDraft {
                description: "b".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(edited.is_completed);
        assert_eq!(edited.description, "b");
    }
}
