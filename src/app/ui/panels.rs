//! Header and central message panel rendering

use eframe::egui;

use crate::app::PreviewApp;
use crate::ui;
use crate::ui::header::HeaderAction;
use crate::ui::messages::MessageAction;

impl PreviewApp {
    pub(in crate::app) fn render_header(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut action = None;

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                action = ui::header::render_header(
                    ui,
                    self.state.is_generating,
                    self.state.backend_error.as_deref(),
                    &theme,
                );
            });

        match action {
            Some(HeaderAction::ToggleTheme) => self.toggle_theme(ctx),
            None => {}
        }
    }

    /// Render the central panel with messages
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut action = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]).inner_margin(0.0))
            .show(ctx, |ui| {
                action = ui::messages::render_messages(
                    ui,
                    &self.state.messages,
                    self.state.is_generating,
                    &mut self.state.scroll_to_bottom,
                    &theme,
                );
            });

        match action {
            Some(MessageAction::ChangeTone(id, tone)) => self.change_tone(id, tone),
            Some(MessageAction::Copy(id)) => {
                if let Some(msg) = self.state.message(id) {
                    ctx.copy_text(msg.content.clone());
                    tracing::debug!(message_id = %id, "copied to clipboard");
                }
            }
            None => {}
        }
    }
}
