//! Entity structs for the four Quill collections.
//!
//! Each entity is persisted as one element of a JSON array stored under its
//! collection key (`articles`, `references`, `tasks`, `goals`). Field names are
//! camelCase on disk. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.
//!
//! Entities are created from drafts, which carry only user-supplied fields and
//! are validated before an ID is assigned.

mod article;
mod goal;
mod reference;
mod task;

pub use article::{Article, ArticleDraft};
pub use goal::{GoalDraft, ProjectGoal};
pub use reference::{Reference, ReferenceDraft};
pub use task::{Task, TaskDraft};

/// Anything stored in a collection keyed by identity.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_identified!(Article, Reference, Task, ProjectGoal);

/// Treat `None` and whitespace-only strings alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
