//! Small painted widgets: role avatars and the loading skeleton.

use eframe::egui::{self, Color32};

use super::colors::PreviewTheme;
use crate::message::Role;

/// Fraction of the bubble width covered by each skeleton line.
pub const SKELETON_LINES: [f32; 4] = [1.0, 0.92, 0.97, 0.6];
const SKELETON_LINE_HEIGHT: f32 = 10.0;
const SKELETON_GAP: f32 = 8.0;

/// Render a circular avatar with a short role label ("You" / "AI").
pub fn render_avatar(ui: &mut egui::Ui, role: Role, size: f32, theme: &PreviewTheme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();

    let (bg, fg, label) = match role {
        Role::User => (theme.surface[4], theme.text_primary, "You"),
        Role::Ai => (theme.accent, theme.on_accent, "AI"),
    };

    // Subtle shadow for depth
    painter.circle_filled(rect.center() + egui::vec2(0.0, 1.5), size / 2.0, Color32::from_black_alpha(30));
    painter.circle_filled(rect.center(), size / 2.0, bg);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(size * 0.36),
        fg,
    );

    response
}

/// Opacity multiplier for the skeleton at time `t` (seconds). Pulses between 0.45 and 1.0.
pub fn pulse_alpha(t: f64) -> f32 {
    let phase = (t * std::f64::consts::TAU / 1.6).sin() as f32;
    0.725 + 0.275 * phase
}

/// Paint pulsing placeholder bars in place of message content.
pub fn render_skeleton(ui: &mut egui::Ui, width: f32, theme: &PreviewTheme) -> egui::Response {
    let height = SKELETON_LINES.len() as f32 * (SKELETON_LINE_HEIGHT + SKELETON_GAP) - SKELETON_GAP;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    let alpha = pulse_alpha(ui.input(|i| i.time));
    let color = theme.surface[4].linear_multiply(alpha);
    let painter = ui.painter();

    for (i, fraction) in SKELETON_LINES.iter().enumerate() {
        let top = rect.top() + i as f32 * (SKELETON_LINE_HEIGHT + SKELETON_GAP);
        let line = egui::Rect::from_min_size(
            egui::pos2(rect.left(), top),
            egui::vec2(width * fraction, SKELETON_LINE_HEIGHT),
        );
        painter.rect_filled(line, SKELETON_LINE_HEIGHT / 2.0, color);
    }

    // Keep the pulse animating
    ui.ctx().request_repaint();
    response
}
