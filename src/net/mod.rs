//! Networking: backend wire types, HTTP calls, and the offline responder.

pub mod api;
pub mod mock;
pub mod types;
