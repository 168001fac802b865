use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, require_text};
use crate::ids::{PREFIX_GOAL, generate_id};

/// A research project goal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGoal {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub is_achieved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub description: String,
}

impl ProjectGoal {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is blank.
    pub fn create(draft: GoalDraft) -> Result<Self, CoreError> {
        require_text("description", &draft.description)?;
        Ok(Self {
            id: generate_id(PREFIX_GOAL),
            description: draft.description,
            is_achieved: false,
        })
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is blank.
    pub fn apply(&self, draft: GoalDraft) -> Result<Self, CoreError> {
        require_text("description", &draft.description)?;
        Ok(Self {
            description: draft.description,
            ..self.clone()
        })
    }
}
