//! UI components.

pub mod chat_launcher;
pub mod chat_panel;
pub mod resume;
pub mod theme_toggle;
