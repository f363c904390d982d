//! Prompt input bar: attach placeholder, composer and send/stop button

use eframe::egui;

use crate::app::PreviewApp;
use crate::input_state::{EnterAction, PrimaryAction};

const COMPOSER_ID: &str = "composer";

impl PreviewApp {
    /// Render the input panel at the bottom of the window
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let composer_id = egui::Id::new(COMPOSER_ID);

        // Take Enter away from the multiline editor before it can insert a newline.
        // Shift+Enter is left alone and inserts a line break.
        let focused = ctx.memory(|m| m.has_focus(composer_id));
        let shift = ctx.input(|i| i.modifiers.shift);
        let enter = focused.then(|| self.input.enter_action(shift, self.state.is_generating));
        let enter_pressed = matches!(enter, Some(EnterAction::Submit | EnterAction::Swallow))
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

        let mut primary_clicked = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // Attachments are not supported in the preview
                    ui.add_enabled(false, egui::Button::new("📎"))
                        .on_disabled_hover_text("Attachments are not available in this preview");

                    let action = self.input.primary_action(self.state.is_generating);
                    let button_width = 72.0;

                    egui::Frame::new()
                        .fill(theme.surface[2])
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            let response = ui.add(
                                egui::TextEdit::multiline(&mut self.input.message_input)
                                    .id(composer_id)
                                    .desired_rows(1)
                                    .desired_width(ui.available_width() - button_width - 24.0)
                                    .frame(false)
                                    .hint_text("Ask anything… (Enter to send, Shift+Enter for newline)"),
                            );
                            if response.has_focus() {
                                let outer = response.rect.expand(4.0);
                                ui.painter().rect_stroke(
                                    outer,
                                    8.0,
                                    egui::Stroke::new(1.0, theme.accent.linear_multiply(0.5)),
                                    egui::StrokeKind::Outside,
                                );
                            }
                        });

                    let button = match action {
                        PrimaryAction::Stop => ui
                            .add_sized(
                                [button_width, 32.0],
                                egui::Button::new(egui::RichText::new("■ Stop").color(theme.on_accent))
                                    .fill(theme.error),
                            )
                            .on_hover_text("Stop generating (Esc)"),
                        PrimaryAction::Send { enabled } => ui.add_enabled(
                            enabled,
                            egui::Button::new(egui::RichText::new("Send ➤").color(theme.on_accent))
                                .fill(theme.accent)
                                .min_size(egui::vec2(button_width, 32.0)),
                        ),
                    };
                    primary_clicked = button.clicked();
                });
            });

        if primary_clicked {
            if self.state.is_generating {
                self.stop();
            } else {
                self.submit();
            }
        } else if enter_pressed && enter == Some(EnterAction::Submit) {
            self.submit();
        }

        if enter_pressed || primary_clicked {
            ctx.memory_mut(|m| m.request_focus(composer_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Receiver};

    use crate::config::Settings;
    use crate::message::Role;
    use crate::protocol::BackendAction;

    fn test_app() -> (PreviewApp, Receiver<BackendAction>) {
        let (action_tx, action_rx) = unbounded();
        let (_event_tx, event_rx) = unbounded();
        let app = PreviewApp::from_parts(Settings::default(), action_tx, event_rx, None);
        (app, action_rx)
    }

    fn run_frame(
        ctx: &egui::Context,
        app: &mut PreviewApp,
        events: Vec<egui::Event>,
        modifiers: egui::Modifiers,
    ) {
        let raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            modifiers,
            events,
            ..Default::default()
        };
        let _ = ctx.run(raw, |ctx| app.render_input_panel(ctx));
    }

    /// Lay out the input bar once and give the composer keyboard focus.
    ///
    /// The editor keeps its cursor between frames, so set the buffer first.
    fn focused_context(app: &mut PreviewApp) -> egui::Context {
        let ctx = egui::Context::default();
        run_frame(&ctx, app, Vec::new(), egui::Modifiers::NONE);
        ctx.memory_mut(|m| m.request_focus(egui::Id::new(COMPOSER_ID)));
        run_frame(&ctx, app, Vec::new(), egui::Modifiers::NONE);
        assert!(ctx.memory(|m| m.has_focus(egui::Id::new(COMPOSER_ID))));
        ctx
    }

    fn press_enter(ctx: &egui::Context, app: &mut PreviewApp, modifiers: egui::Modifiers) {
        let enter = egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        };
        run_frame(ctx, app, vec![enter], modifiers);
    }

    #[test]
    fn test_enter_sends_when_idle() {
        let (mut app, action_rx) = test_app();
        let before = app.state.messages.len();
        app.input.message_input = "hello".into();
        let ctx = focused_context(&mut app);

        press_enter(&ctx, &mut app, egui::Modifiers::NONE);

        assert_eq!(app.state.messages.len(), before + 1);
        let sent = app.state.messages.last().unwrap();
        assert_eq!(sent.role, Role::User);
        assert_eq!(sent.content, "hello");
        assert!(app.input.message_input.is_empty());
        assert!(app.state.is_generating);
        assert!(matches!(
            action_rx.try_recv(),
            Ok(BackendAction::ScheduleReply { .. })
        ));
    }

    #[test]
    fn test_enter_while_generating_leaves_buffer_alone() {
        let (mut app, action_rx) = test_app();
        let ctx = focused_context(&mut app);

        app.input.message_input = "first".into();
        press_enter(&ctx, &mut app, egui::Modifiers::NONE);
        assert!(app.state.is_generating);
        let _ = action_rx.try_recv();
        let before = app.state.messages.len();

        app.input.message_input = "second".into();
        press_enter(&ctx, &mut app, egui::Modifiers::NONE);

        assert_eq!(app.input.message_input, "second");
        assert_eq!(app.state.messages.len(), before);
        assert!(action_rx.try_recv().is_err());
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let (mut app, action_rx) = test_app();
        let before = app.state.messages.len();
        app.input.message_input = "hello".into();
        let ctx = focused_context(&mut app);

        press_enter(&ctx, &mut app, egui::Modifiers::SHIFT);

        assert_eq!(app.input.message_input, "hello\n");
        assert_eq!(app.state.messages.len(), before);
        assert!(!app.state.is_generating);
        assert!(action_rx.try_recv().is_err());
    }
}
