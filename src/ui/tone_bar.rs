//! Tone selector chips shown under every AI message.

use eframe::egui;

use crate::message::ToneState;
use crate::tone::{Tone, ALL_TONES};
use crate::ui::theme::PreviewTheme;

/// Render one chip per tone. Returns the tone the user clicked, if any.
///
/// Chips are disabled while the message is being rewritten, so no tone can be
/// picked until the current rewrite lands.
pub fn render_tone_bar(ui: &mut egui::Ui, tone_state: &ToneState, theme: &PreviewTheme) -> Option<Tone> {
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for tone in ALL_TONES {
            let selected = tone_state.current == tone;
            let text = if selected {
                egui::RichText::new(tone.label()).color(theme.on_accent)
            } else {
                egui::RichText::new(tone.label()).color(theme.text_secondary)
            };
            let chip = egui::Button::new(text)
                .fill(if selected { theme.accent } else { theme.surface[3] })
                .corner_radius(12.0)
                .small();

            let response = ui.add_enabled(!tone_state.is_rewriting, chip);
            if response.clicked() && !selected {
                picked = Some(tone);
            }
        }

        if tone_state.is_rewriting {
            ui.add_space(4.0);
            ui.add(egui::Spinner::new().size(12.0).color(theme.text_muted));
            ui.label(egui::RichText::new("Rewriting…").small().color(theme.text_muted));
        }
    });

    picked
}
