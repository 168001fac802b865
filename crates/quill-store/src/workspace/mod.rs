//! Use-case service over the persisted state and the generation client.
//!
//! `Workspace` owns an [`AppState`] and a [`GenerationClient`]. Operations are
//! split by area the same way the collections are:
//!
//! - `articles`: CRUD plus summary generation
//! - `references`: add/delete plus bibliography formatting
//! - `organization`: tasks and goals
//! - `writing`: section templates, review, phrases, formatting guide
//! - `prompt`: free prompts, JSON prompts, image prompts
//! - `dashboard`: the read-only overview
//!
//! Each operation that calls the service records its outcome on an
//! [`InvocationSite`] and returns that site's [`RequestState`]. Local
//! validation failures are returned as errors before any call is made.
//! Operations take `&mut self`, so calls on one workspace never overlap.

mod articles;
mod dashboard;
mod organization;
mod prompt;
mod references;
mod writing;

pub use dashboard::Dashboard;

use quill_config::QuillConfig;
use quill_core::entities::Identified;
use quill_core::errors::CoreError;
use quill_core::request::{InvocationSite, RequestState, Ticket};
use quill_genai::{GenerationClient, GenerationError, HttpTransport, Transport};

use crate::error::StoreError;
use crate::kv::{FileStore, KeyValueStore};
use crate::state::AppState;

/// Places in the application that trigger a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Summary,
    Template,
    Review,
    Phrases,
    Guide,
    Prompt,
}

impl Site {
    pub const ALL: [Self; 6] = [
        Self::Summary,
        Self::Template,
        Self::Review,
        Self::Phrases,
        Self::Guide,
        Self::Prompt,
    ];
}

#[derive(Debug)]
struct Sites {
    summary: InvocationSite<String>,
    template: InvocationSite<String>,
    review: InvocationSite<String>,
    phrases: InvocationSite<String>,
    guide: InvocationSite<String>,
    prompt: InvocationSite<String>,
}

impl Sites {
    fn new() -> Self {
        Self {
            summary: InvocationSite::new(),
            template: InvocationSite::new(),
            review: InvocationSite::new(),
            phrases: InvocationSite::new(),
            guide: InvocationSite::new(),
            prompt: InvocationSite::new(),
        }
    }

    const fn get(&self, site: Site) -> &InvocationSite<String> {
        match site {
            Site::Summary => &self.summary,
            Site::Template => &self.template,
            Site::Review => &self.review,
            Site::Phrases => &self.phrases,
            Site::Guide => &self.guide,
            Site::Prompt => &self.prompt,
        }
    }

    const fn get_mut(&mut self, site: Site) -> &mut InvocationSite<String> {
        match site {
            Site::Summary => &mut self.summary,
            Site::Template => &mut self.template,
            Site::Review => &mut self.review,
            Site::Phrases => &mut self.phrases,
            Site::Guide => &mut self.guide,
            Site::Prompt => &mut self.prompt,
        }
    }
}

pub struct Workspace<T, S> {
    state: AppState<S>,
    client: GenerationClient<T>,
    sites: Sites,
    recent_limit: usize,
}

impl Workspace<HttpTransport, FileStore> {
    /// Open the on-disk workspace described by `config`.
    ///
    /// Fails before touching the data directory when the service credential
    /// is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] without a usable credential and
    /// [`StoreError::Io`] if the data directory cannot be created.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn open(config: &QuillConfig) -> Result<Self, StoreError> {
        let gemini = config.require_credentials()?;
        let store = FileStore::new(&config.general.data_dir)?;
        tracing::debug!(dir = %store.dir().display(), model = %gemini.model, "opening workspace");
        let state = AppState::load(store, config.general.citation_style);
        Ok(Self::new(
            GenerationClient::from_config(gemini),
            state,
            config.general.recent_limit,
        ))
    }
}

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    pub fn new(client: GenerationClient<T>, state: AppState<S>, recent_limit: usize) -> Self {
        Self {
            state,
            client,
            sites: Sites::new(),
            recent_limit,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState<S> {
        &self.state
    }

    #[must_use]
    pub const fn client(&self) -> &GenerationClient<T> {
        &self.client
    }

    /// Current state of one invocation site.
    #[must_use]
    pub const fn site(&self, site: Site) -> &RequestState<String> {
        self.sites.get(site).state()
    }

    fn begin(&mut self, site: Site) -> Ticket {
        self.sites.get_mut(site).begin()
    }

    /// Record the outcome of the call started with `ticket`.
    ///
    /// `message` replaces the error text in the recorded failure when given.
    fn finish(
        &mut self,
        site: Site,
        ticket: Ticket,
        message: Option<String>,
        outcome: Result<String, GenerationError>,
    ) -> &RequestState<String> {
        let target = self.sites.get_mut(site);
        match outcome {
            Ok(text) => {
                target.succeed(ticket, text);
            }
            Err(e) => {
                tracing::warn!(?site, %ticket, %e, "generation failed");
                target.fail(ticket, message.unwrap_or_else(|| e.to_string()));
            }
        }
        target.state()
    }
}

// ── Collection helpers ─────────────────────────────────────────────

/// Find an entity by id.
fn find<'a, E: Identified>(items: &'a [E], entity_type: &str, id: &str) -> Result<&'a E, StoreError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| StoreError::not_found(entity_type, id))
}

/// Copy of `items` with the entity `id` replaced by `update(old)`.
fn replaced<E, F>(items: &[E], entity_type: &str, id: &str, update: F) -> Result<(Vec<E>, E), StoreError>
where
    E: Identified + Clone,
    F: FnOnce(&E) -> Result<E, CoreError>,
{
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| StoreError::not_found(entity_type, id))?;
    let updated = update(&items[index])?;
    let mut next = items.to_vec();
    next[index] = updated.clone();
    Ok((next, updated))
}

/// Copy of `items` without the entity `id`.
fn without<E: Identified + Clone>(items: &[E], entity_type: &str, id: &str) -> Result<Vec<E>, StoreError> {
    if !items.iter().any(|item| item.id() == id) {
        return Err(StoreError::not_found(entity_type, id));
    }
    Ok(items.iter().filter(|item| item.id() != id).cloned().collect())
}
