//! UI components for the chat page.

pub mod ask_bar;
pub mod chart_slot;
pub mod transcript;
