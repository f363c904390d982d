//! Top header: title, generation status and theme toggle.

use eframe::egui;

use crate::ui::theme::PreviewTheme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleTheme,
}

pub fn render_header(
    ui: &mut egui::Ui,
    is_generating: bool,
    backend_error: Option<&str>,
    theme: &PreviewTheme,
) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Tone Preview")
                .heading()
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(12.0);

        let (status, color) = match (backend_error, is_generating) {
            (Some(err), _) => (format!("⚠ {}", err), theme.error),
            (None, true) => ("Generating…".to_string(), theme.text_secondary),
            (None, false) => ("Ready".to_string(), theme.success),
        };
        ui.label(egui::RichText::new(status).small().color(color));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if theme.is_dark() { "☀ Light" } else { "🌙 Dark" };
            if ui
                .button(label)
                .on_hover_text("Toggle theme (Ctrl+L)")
                .clicked()
            {
                action = Some(HeaderAction::ToggleTheme);
            }
        });
    });

    action
}
