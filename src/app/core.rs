//! Core PreviewApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, SendError, Sender};
use eframe::egui;
use std::thread::{self, JoinHandle};

use crate::backend::run_backend;
use crate::config::{self, Settings};
use crate::input_state::InputState;
use crate::message::MessageId;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ChatState;
use crate::tone::Tone;
use crate::ui::theme::{self, PreviewTheme};

pub struct PreviewApp {
    // Session state (transcript, generating flag, pending reply)
    pub state: ChatState,

    // Composer buffer
    pub input: InputState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    pub settings: Settings,
    pub theme: PreviewTheme,

    backend: Option<JoinHandle<()>>,
    persist_on_drop: bool,
}

impl PreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = config::load_settings();
        let mut app = Self::with_settings(settings);
        theme::apply_app_style(&cc.egui_ctx, &app.theme);
        app.persist_on_drop = true;
        app
    }

    /// Build the app and start the scheduler thread without touching egui.
    pub fn with_settings(settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let backend = thread::Builder::new()
            .name("tone-preview-scheduler".into())
            .spawn(move || run_backend(action_rx, event_tx));
        let backend = match backend {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn scheduler thread");
                None
            }
        };

        Self::from_parts(settings, action_tx, event_rx, backend)
    }

    /// Assemble the app around existing scheduler channels.
    pub(crate) fn from_parts(
        settings: Settings,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        backend: Option<JoinHandle<()>>,
    ) -> Self {
        let mut state = ChatState::new(settings.delays());
        if backend.is_none() {
            state.backend_error = Some("Scheduler unavailable".into());
        }

        tracing::info!(
            theme = %settings.theme,
            reply_delay_ms = settings.reply_delay_ms,
            rewrite_delay_ms = settings.rewrite_delay_ms,
            "preview started"
        );

        Self {
            state,
            input: InputState::new(),
            action_tx,
            event_rx,
            theme: PreviewTheme::by_name(&settings.theme),
            settings,
            backend,
            persist_on_drop: false,
        }
    }

    /// Hand a deferred action to the scheduler.
    ///
    /// If the scheduler is gone the state change behind the action is undone,
    /// so nothing is left waiting on a timer that will never fire.
    pub(crate) fn dispatch(&mut self, action: Option<BackendAction>) {
        let Some(action) = action else { return };
        if let Err(SendError(action)) = self.action_tx.send(action) {
            tracing::error!(?action, "scheduler channel closed");
            self.state.rollback(&action);
            self.state.backend_error = Some("Scheduler stopped".into());
        }
    }

    /// Send the composer contents, if any.
    pub fn submit(&mut self) {
        let action = self.state.send(&mut self.input);
        self.dispatch(action);
    }

    /// Stop the pending reply.
    pub fn stop(&mut self) {
        let action = self.state.stop();
        self.dispatch(action);
    }

    pub fn change_tone(&mut self, id: MessageId, tone: Tone) {
        let action = self.state.change_tone(id, tone);
        self.dispatch(action);
    }

    /// Rewrite the newest AI reply, if there is one.
    pub fn change_latest_tone(&mut self, tone: Tone) {
        if let Some(id) = self.state.latest_ai_message() {
            self.change_tone(id, tone);
        }
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = if self.theme.is_dark() {
            PreviewTheme::light()
        } else {
            PreviewTheme::dark()
        };
        self.settings.theme = self.theme.name.clone();
        theme::apply_app_style(ctx, &self.theme);
    }
}

impl Drop for PreviewApp {
    fn drop(&mut self) {
        if self.persist_on_drop {
            if let Err(e) = config::save_settings(&self.settings) {
                tracing::warn!(error = %e, "failed to save settings");
            }
        }

        let _ = self.action_tx.send(BackendAction::Shutdown);
        if let Some(handle) = self.backend.take() {
            let _ = handle.join();
        }
    }
}
