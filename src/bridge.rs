//! Cross-component "ask about this" entry point.
//!
//! The resume's clickable terms live in a sibling component tree with no
//! shared ancestor below the app root, so the chat launcher registers a
//! handler here and terms invoke it by value. The bridge is provided via
//! Leptos context at the root rather than living in a bare global; it holds
//! at most one handler with last-writer-wins semantics, and misuse (invoking
//! while nothing is registered, or after cleanup) is a silent no-op.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::sync::{Arc, Mutex};

type AskHandler = Box<dyn Fn(String) + Send + Sync>;

/// Single-slot callback registry for opening the chat panel with a question.
#[derive(Clone, Default)]
pub struct AskBridge {
    slot: Arc<Mutex<Option<AskHandler>>>,
}

impl AskBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler, replacing any previous one.
    pub fn register(&self, handler: impl Fn(String) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(Box::new(handler));
        }
    }

    /// Remove the handler. Later invocations become no-ops.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }

    pub fn is_registered(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Invoke the registered handler with `query`.
    ///
    /// Returns `false` (and does nothing) when no handler is registered.
    pub fn invoke(&self, query: &str) -> bool {
        let Ok(slot) = self.slot.lock() else {
            return false;
        };
        match slot.as_ref() {
            Some(handler) => {
                handler(query.to_owned());
                true
            }
            None => false,
        }
    }
}
