//! Server-sent event decoding for streamed responses.
//!
//! The streaming endpoint (`alt=sse`) sends one JSON fragment per event:
//!
//! ```text
//! data: {"candidates":[...]}\r\n
//! \r\n
//! ```
//!
//! Network chunks do not line up with events, so [`SseDecoder`] buffers raw
//! bytes until a full line is available and emits an event's `data` payload
//! on the blank line that ends it. Comment lines (`:`) and other fields are
//! ignored.

use std::collections::VecDeque;
use std::fmt::Display;

use futures::{Stream, StreamExt, stream};

use crate::error::GenerationError;

/// Incremental decoder from raw bytes to event payloads.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every event completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');
            if let Some(event) = self.process_line(line) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a trailing event that was not terminated by a blank line.
    pub fn finish(&mut self) -> Option<String> {
        if !self.buffer.is_empty() {
            let line = String::from_utf8_lossy(&std::mem::take(&mut self.buffer)).into_owned();
            let line = line.trim_end_matches('\r');
            if let Some(event) = self.process_line(line) {
                return Some(event);
            }
        }
        self.take_event()
    }

    fn process_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.take_event();
        }
        if line.starts_with(':') {
            return None;
        }
        if let Some(value) = line.strip_prefix("data:") {
            self.data
                .push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
        None
    }

    fn take_event(&mut self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let event = self.data.join("\n");
        self.data.clear();
        Some(event)
    }
}

struct EventState<S> {
    body: S,
    decoder: SseDecoder,
    ready: VecDeque<String>,
    done: bool,
}

/// Adapt a byte stream into a stream of event payloads.
///
/// A body error is yielded once as [`GenerationError::Stream`] and ends the
/// stream.
pub fn decode_events<S, B, E>(body: S) -> impl Stream<Item = Result<String, GenerationError>>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: Display,
{
    let state = EventState {
        body,
        decoder: SseDecoder::new(),
        ready: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(event) = state.ready.pop_front() {
                return Some((Ok(event), state));
            }
            if state.done {
                return None;
            }
            match state.body.next().await {
                Some(Ok(chunk)) => {
                    let events = state.decoder.push(chunk.as_ref());
                    state.ready.extend(events);
                }
                Some(Err(error)) => {
                    state.done = true;
                    state.ready.clear();
                    return Some((Err(GenerationError::Stream(error.to_string())), state));
                }
                None => {
                    state.done = true;
                    state.ready.extend(state.decoder.finish());
                }
            }
        }
    })
}
