//! UI rendering modules for the preview.
//!
//! This module contains all egui-based UI rendering code, organized by component:
//! - `header`: Title bar with status and theme toggle
//! - `messages`: Message list rendering
//! - `tone_bar`: Tone selector chips
//! - `theme`: Color schemes and styling utilities

pub mod header;
pub mod messages;
pub mod theme;
pub mod tone_bar;
