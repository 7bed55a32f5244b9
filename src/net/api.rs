//! HTTP calls to the answering backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting the backend unreachable, since these
//! calls are only meaningful in the browser.
//!
//! The backend base URL can be overridden at build time with
//! `RESUME_BACKEND_URL`; it defaults to the local dev server.

#![allow(clippy::unused_async)]

use crate::state::session::ProbeOutcome;

use crate::net::types::SendError;
#[cfg(feature = "hydrate")]
use crate::net::types::{ChatRequest, ChatResponse};
use crate::state::conversation::ChatMessage;

/// How long the startup reachability probe waits before giving up.
pub const PROBE_TIMEOUT_MS: u64 = 2000;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the answering backend.
pub fn backend_base() -> &'static str {
    option_env!("RESUME_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// One-shot reachability probe: `GET {base}/` raced against a strict timeout.
///
/// Run once at session start; there are no retries and no re-probing later.
pub async fn probe_backend() -> ProbeOutcome {
    #[cfg(feature = "hydrate")]
    {
        use futures::FutureExt;

        let url = format!("{}/", backend_base());
        let request = gloo_net::http::Request::get(&url).send().fuse();
        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(
            PROBE_TIMEOUT_MS,
        ))
        .fuse();
        futures::pin_mut!(request, timeout);

        futures::select! {
            resp = request => match resp {
                Ok(resp) if resp.ok() => {
                    leptos::logging::log!("backend reachable at {}", backend_base());
                    ProbeOutcome::Reachable
                }
                Ok(resp) => {
                    leptos::logging::warn!("backend probe returned HTTP {}", resp.status());
                    ProbeOutcome::Unreachable
                }
                Err(e) => {
                    leptos::logging::warn!("backend probe failed: {e}");
                    ProbeOutcome::Unreachable
                }
            },
            _ = timeout => {
                leptos::logging::warn!("backend probe timed out after {PROBE_TIMEOUT_MS}ms");
                ProbeOutcome::Unreachable
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ProbeOutcome::Unreachable
    }
}

/// Send the conversation to `POST {base}/api/chat` and return the reply text.
///
/// # Errors
///
/// Returns a [`SendError`] on network failure, a non-OK status, or a body
/// that does not match the expected `{ "response": … }` shape.
pub async fn send_chat(history: &[ChatMessage]) -> Result<String, SendError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/chat", backend_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(&ChatRequest { messages: history.to_vec() })
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(SendError::Status(resp.status()));
        }

        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|_| SendError::MalformedBody)?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = history;
        Err(SendError::Network("not available on server".to_owned()))
    }
}
