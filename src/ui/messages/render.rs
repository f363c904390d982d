//! Message list rendering: bubbles, tone chips and the typing indicator.

use eframe::egui;

use crate::message::{Message, MessageId, Role};
use crate::tone::Tone;
use crate::ui::theme::{self, PreviewTheme};
use crate::ui::tone_bar::render_tone_bar;

const AVATAR_SIZE: f32 = 32.0;
/// Bubbles never grow wider than this share of the list.
const BUBBLE_WIDTH_FRACTION: f32 = 0.72;

/// Something the user did inside the message list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAction {
    ChangeTone(MessageId, Tone),
    Copy(MessageId),
}

/// Render the scrollable transcript.
///
/// When `scroll_to_bottom` is set the list animates to its end and the flag is
/// cleared.
pub fn render_messages(
    ui: &mut egui::Ui,
    messages: &[Message],
    is_generating: bool,
    scroll_to_bottom: &mut bool,
    theme: &PreviewTheme,
) -> Option<MessageAction> {
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(12.0);
            let bubble_width = ui.available_width() * BUBBLE_WIDTH_FRACTION;

            for msg in messages {
                let clicked = match msg.role {
                    Role::User => {
                        render_user_message(ui, msg, bubble_width, theme);
                        None
                    }
                    Role::Ai => render_ai_message(ui, msg, bubble_width, theme),
                };
                action = action.or(clicked);
                ui.add_space(16.0);
            }

            if is_generating {
                render_typing_indicator(ui, theme);
            }

            if *scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                *scroll_to_bottom = false;
            }
        });

    action
}

fn bubble_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(14, 10))
}

fn render_user_message(ui: &mut egui::Ui, msg: &Message, max_width: f32, theme: &PreviewTheme) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
        ui.add_space(12.0);
        theme::render_avatar(ui, Role::User, AVATAR_SIZE, theme);
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            bubble_frame(theme.accent).show(ui, |ui| {
                ui.label(egui::RichText::new(&msg.content).color(theme.on_accent));
            });
            ui.label(egui::RichText::new(&msg.timestamp).small().color(theme.text_muted));
        });
    });
}

fn render_ai_message(
    ui: &mut egui::Ui,
    msg: &Message,
    max_width: f32,
    theme: &PreviewTheme,
) -> Option<MessageAction> {
    let mut action = None;
    let rewriting = msg.is_rewriting();

    ui.horizontal_top(|ui| {
        ui.add_space(12.0);
        theme::render_avatar(ui, Role::Ai, AVATAR_SIZE, theme);
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            bubble_frame(theme.surface[2])
                .stroke(egui::Stroke::new(1.0, theme.border_subtle))
                .show(ui, |ui| {
                    if rewriting {
                        theme::render_skeleton(ui, max_width - 28.0, theme);
                    } else {
                        ui.label(egui::RichText::new(&msg.content).color(theme.text_primary));
                    }
                });

            if let Some(tone_state) = &msg.tone_state {
                ui.add_space(4.0);
                if let Some(tone) = render_tone_bar(ui, tone_state, theme) {
                    action = Some(MessageAction::ChangeTone(msg.id, tone));
                }
            }

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&msg.timestamp).small().color(theme.text_muted));
                let copy = ui
                    .add_enabled(!rewriting, egui::Button::new("Copy").small().frame(false))
                    .on_hover_text("Copy response to clipboard");
                if copy.clicked() {
                    action = Some(MessageAction::Copy(msg.id));
                }
            });
        });
    });

    action
}

fn render_typing_indicator(ui: &mut egui::Ui, theme: &PreviewTheme) {
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        theme::render_avatar(ui, Role::Ai, AVATAR_SIZE, theme);
        ui.add_space(8.0);
        bubble_frame(theme.surface[2]).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(14.0).color(theme.text_muted));
                ui.label(egui::RichText::new("Thinking…").color(theme.text_muted));
            });
        });
    });
    ui.add_space(16.0);
}
