//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`conversation`, `session`, `ui`) so individual
//! components can depend on small focused models. The structs hold plain
//! fields and pure methods; components wrap them in `RwSignal` via context,
//! which keeps every transition natively unit-testable.

pub mod conversation;
pub mod session;
pub mod ui;
