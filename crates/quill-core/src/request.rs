//! Per-invocation request state.
//!
//! ```text
//! idle → pending → succeeded(payload)
//!                → failed(message)
//! succeeded | failed → pending   (new invocation, previous outcome dropped)
//! ```
//!
//! There is no terminal state. An [`InvocationSite`] owns one state and hands
//! out a [`Ticket`] per invocation. Two invocations on the same site may be in
//! flight at once; by default whichever resolves last wins. Sites built with
//! [`Fencing::LatestOnly`] instead drop outcomes from superseded tickets.

use serde::Serialize;
use std::fmt;

/// What the caller renders for one invocation site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Identifies one invocation on a site. Later invocations get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a site treats outcomes that arrive after a newer invocation started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fencing {
    /// Every outcome is applied; the last one to resolve is what remains.
    #[default]
    LastResolvedWins,
    /// Only the most recently issued ticket may change the state.
    LatestOnly,
}

/// One place that can trigger a generation request.
#[derive(Debug, Clone)]
pub struct InvocationSite<T> {
    state: RequestState<T>,
    issued: u64,
    fencing: Fencing,
    failure_message: Option<String>,
}

impl<T> Default for InvocationSite<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InvocationSite<T> {
    /// A site that reports failures with the error's own text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
            fencing: Fencing::LastResolvedWins,
            failure_message: None,
        }
    }

    /// A site that reports every failure with one fixed user-facing message.
    #[must_use]
    pub fn with_failure_message(message: impl Into<String>) -> Self {
        Self {
            failure_message: Some(message.into()),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn fencing(mut self, fencing: Fencing) -> Self {
        self.fencing = fencing;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Start a new invocation. Any previous payload or message is discarded.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = RequestState::Pending;
        Ticket(self.issued)
    }

    /// Record a success. Returns whether the state changed.
    pub fn succeed(&mut self, ticket: Ticket, payload: T) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state = RequestState::Succeeded(payload);
        true
    }

    /// Record a failure with an explicit message. Returns whether the state changed.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state = RequestState::Failed(message.into());
        true
    }

    /// Apply an outcome. Errors are rendered with the site's fixed message if
    /// it has one, otherwise with the error's `Display` text.
    pub fn resolve<E: fmt::Display>(&mut self, ticket: Ticket, outcome: Result<T, E>) -> bool {
        match outcome {
            Ok(payload) => self.succeed(ticket, payload),
            Err(error) => {
                let message = self
                    .failure_message
                    .clone()
                    .unwrap_or_else(|| error.to_string());
                self.fail(ticket, message)
            }
        }
    }

    const fn accepts(&self, ticket: Ticket) -> bool {
        match self.fencing {
            Fencing::LastResolvedWins => true,
            Fencing::LatestOnly => ticket.0 == self.issued,
        }
    }
}
