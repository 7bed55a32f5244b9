#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SendError;
use crate::state::conversation::{ChatMessage, Conversation};

/// Where replies come from for the rest of the session.
///
/// `Mock` is the safe default: the panel works with built-in responses even
/// when no backend is running. The mode only changes through an explicit user
/// toggle or (optionally) a successful startup probe — never by re-probing
/// mid-session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    Live,
    #[default]
    Mock,
}

/// Result of the one-shot startup reachability check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
}

/// Session tunables.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    /// Switch to `Live` automatically when the startup probe succeeds.
    /// Off by default: a reachable backend only lights up the availability
    /// hint, and the visitor opts into live answers themselves.
    pub auto_promote_on_probe: bool,
}

/// Handed out by [`SessionState::begin_send`]; carries everything the caller
/// needs to resolve the send without re-reading shared state.
#[derive(Clone, Debug)]
pub struct SendTicket {
    /// Conversation generation this send belongs to. A reset invalidates it.
    pub generation: u64,
    /// Full history including the just-appended user message.
    pub history: Vec<ChatMessage>,
    /// True when the reply should come from the local mock responder.
    pub mock: bool,
}

/// The chat session state machine.
///
/// One send may be in flight at a time (`pending`); submissions while pending
/// or with blank input are rejected before any state changes. Every accepted
/// user message is eventually paired with exactly one assistant message —
/// either the reply or a diagnostic.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub conversation: Conversation,
    mode: SessionMode,
    pending: bool,
    generation: u64,
    backend_reachable: Option<bool>,
    config: SessionConfig,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// What the startup probe found, if it has run. Drives the ambient
    /// availability hint only; it never changes mode on its own after start.
    pub fn backend_reachable(&self) -> Option<bool> {
        self.backend_reachable
    }

    /// Record the startup probe result. A failed probe forces mock mode for
    /// the rest of the session; a successful one promotes to live only when
    /// configured to.
    pub fn apply_probe(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Reachable => {
                self.backend_reachable = Some(true);
                if self.config.auto_promote_on_probe {
                    self.mode = SessionMode::Live;
                }
            }
            ProbeOutcome::Unreachable => {
                self.backend_reachable = Some(false);
                self.mode = SessionMode::Mock;
            }
        }
    }

    /// Explicit user toggle between live and mock replies.
    pub fn set_mode(&mut self, mode: SessionMode) {
        self.mode = mode;
    }

    /// Try to start a send for `input`.
    ///
    /// Blank input and submissions while a send is in flight are rejected
    /// with no state change. On acceptance the trimmed user message is
    /// appended and the pending flag raised; the returned ticket tells the
    /// caller how (and for which generation) to resolve the send.
    pub fn begin_send(&mut self, input: &str) -> Option<SendTicket> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }

        self.conversation.append(ChatMessage::user(text));
        self.pending = true;

        Some(SendTicket {
            generation: self.generation,
            history: self.conversation.to_vec(),
            mock: self.mode == SessionMode::Mock,
        })
    }

    /// Resolve an in-flight send.
    ///
    /// Outcomes from a stale generation (the panel was reset while the
    /// request was in flight) are dropped without touching the conversation.
    /// A failure appends a single diagnostic assistant message and leaves the
    /// mode unchanged so the visitor can retry.
    pub fn finish_send(&mut self, generation: u64, outcome: Result<String, SendError>) {
        if generation != self.generation {
            return;
        }

        let content = match outcome {
            Ok(reply) => reply,
            Err(err) => diagnostic(&err),
        };
        self.conversation.append(ChatMessage::assistant(content));
        self.pending = false;
    }

    /// Tear the conversation down to the seeded greeting.
    ///
    /// Bumps the generation so any send still in flight resolves as stale
    /// instead of landing in the fresh conversation.
    pub fn reset(&mut self) {
        self.conversation.reset();
        self.pending = false;
        self.generation += 1;
    }
}

/// Visitor-facing text for a failed live send.
fn diagnostic(err: &SendError) -> String {
    format!(
        "Sorry, I ran into a connection problem reaching the answering backend ({err}). \
The server may not be running — you can switch on built-in responses and keep asking."
    )
}
