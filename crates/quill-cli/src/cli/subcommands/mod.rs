mod article;
mod goal;
mod reference;
mod style;
mod task;
mod write;

pub use article::ArticleCommands;
pub use goal::GoalCommands;
pub use reference::{ReferenceArgs, ReferenceCommands};
pub use style::StyleCommands;
pub use task::TaskCommands;
pub use write::WriteCommands;
