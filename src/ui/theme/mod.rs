//! Color themes and styling utilities for the preview.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::PreviewTheme;
pub use fonts::{apply_app_style, configure_text_styles};
pub use widgets::{pulse_alpha, render_avatar, render_skeleton};
