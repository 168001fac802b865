//! # quill-store
//!
//! Persisted collections and the use-case service for Quill.
//!
//! - [`KeyValueStore`] with a directory-backed [`FileStore`] and an in-memory
//!   [`MemoryStore`]; collections are stored whole as JSON documents
//! - [`AppState`] holding the articles, references, tasks, goals and the
//!   default citation style
//! - [`Workspace`] combining the state with a generation client: CRUD for
//!   every collection, summaries, writing helpers, bibliography, the
//!   dashboard and free prompts
//!
//! Writes replace a whole collection; the last writer wins.

pub mod kv;
pub mod state;
pub mod workspace;

mod error;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore, load_or_default, save};
pub use state::AppState;
pub use workspace::{Dashboard, Site, Workspace};
