//! Shared fixtures for workspace integration tests.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use futures::stream;
use quill_core::enums::CitationStyle;
use quill_genai::wire::Contents;
use quill_genai::{
    ChunkStream, GenerateContentResponse, GenerationClient, GenerationError, GenerationRequest,
    Transport,
};
use quill_store::{AppState, KeyValueStore, MemoryStore, StoreError, Workspace};

/// Canned outcome for one call.
pub enum Reply {
    Text(&'static str),
    Chunks(Vec<&'static str>),
    Fail(u16),
}

/// Answers calls in order from a script and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            seen: Mutex::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        match &self.seen.lock().unwrap().last().unwrap().contents {
            Contents::Text(text) => text.clone(),
            Contents::Parts(_) => String::new(),
        }
    }

    fn next(&self, request: GenerationRequest) -> Reply {
        self.seen.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Fail(500))
    }
}

fn failure(status: u16) -> GenerationError {
    GenerationError::Api {
        status,
        message: "scripted failure".to_string(),
    }
}

impl Transport for ScriptedTransport {
    async fn send(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        match self.next(request) {
            Reply::Text(text) => Ok(GenerateContentResponse::from_text(text)),
            Reply::Chunks(chunks) => Ok(GenerateContentResponse::from_text(chunks.concat())),
            Reply::Fail(status) => Err(failure(status)),
        }
    }

    async fn send_streaming(
        &self,
        request: GenerationRequest,
    ) -> Result<ChunkStream, GenerationError> {
        let chunks = match self.next(request) {
            Reply::Text(text) => vec![text],
            Reply::Chunks(chunks) => chunks,
            Reply::Fail(status) => return Err(failure(status)),
        };
        let items: Vec<_> = chunks
            .into_iter()
            .map(|chunk| Ok(GenerateContentResponse::from_text(chunk)))
            .collect();
        Ok(stream::iter(items).boxed())
    }
}

pub fn workspace(transport: &ScriptedTransport) -> Workspace<&ScriptedTransport, MemoryStore> {
    workspace_with(transport, MemoryStore::new())
}

/// Workspace over an existing store, loaded the way startup does it.
pub fn workspace_with<S: KeyValueStore>(
    transport: &ScriptedTransport,
    store: S,
) -> Workspace<&ScriptedTransport, S> {
    let state = AppState::load(store, CitationStyle::Apa);
    Workspace::new(GenerationClient::new(transport, "test-model"), state, 3)
}

/// Memory store whose writes start failing once `break_writes` is called.
#[derive(Default)]
pub struct BrittleStore {
    inner: MemoryStore,
    broken: AtomicBool,
}

impl BrittleStore {
    pub fn break_writes(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for BrittleStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(io::Error::other("disk full").into());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}
