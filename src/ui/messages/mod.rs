//! Message rendering for the central chat panel.

mod render;

// Re-export public API
pub use render::{render_messages, MessageAction};
