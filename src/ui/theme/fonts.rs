//! Text style definitions and global egui styling.

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::PreviewTheme;

/// Text hierarchy
///
/// - **Small**: 11px - Timestamps, hints
/// - **Body**: 14px - Message content
/// - **Button**: 13px - Tone chips and buttons
/// - **Heading**: 16px - Header title
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
    ]
    .into()
}

/// Apply spacing, widget rounding and colors for `theme` to the whole context.
pub fn apply_app_style(ctx: &egui::Context, theme: &PreviewTheme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    let widgets = &mut style.visuals.widgets;
    for visuals in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
        visuals.bg_stroke = egui::Stroke::NONE;
        visuals.corner_radius = egui::CornerRadius::same(12);
    }
    widgets.inactive.weak_bg_fill = theme.surface[3];
    widgets.hovered.weak_bg_fill = theme.surface[4];
    widgets.active.weak_bg_fill = theme.accent;

    style.visuals.selection.bg_fill = theme.accent.linear_multiply(0.4);
    style.visuals.extreme_bg_color = theme.surface[2];

    ctx.set_style(style);
}
