//! Core session state, separated from UI logic.
//!
//! `ChatState` is the whole preview session: the transcript, the generating
//! flag and the bookkeeping that ties scheduler events back to the request that
//! caused them. Every operation is synchronous; anything deferred is returned
//! as a `BackendAction` for the caller to hand to the scheduler, and comes back
//! later through `apply_event`.

use std::time::Duration;

use crate::input_state::InputState;
use crate::message::{Message, MessageId, Role};
use crate::protocol::{BackendAction, GuiEvent, ReplyTicket};
use crate::tone::Tone;
use crate::validation;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_REWRITE_DELAY: Duration = Duration::from_millis(1000);

const SEED_PROMPT: &str = "Can you explain how Rust's ownership model works?";

/// Artificial delays of the simulated backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    pub reply: Duration,
    pub rewrite: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            reply: DEFAULT_REPLY_DELAY,
            rewrite: DEFAULT_REWRITE_DELAY,
        }
    }
}

/// Core application state for the chat preview.
///
/// Owned by `PreviewApp` and passed to UI components as needed.
#[derive(Debug)]
pub struct ChatState {
    /// Transcript in display order. Append-only.
    pub messages: Vec<Message>,

    /// True between a send and its reply (or a stop).
    pub is_generating: bool,

    /// Ticket of the reply the scheduler is currently holding for us.
    pub pending_reply: Option<ReplyTicket>,

    /// Set after every transcript mutation; the message list consumes it.
    pub scroll_to_bottom: bool,

    /// Last scheduler failure, shown in the header.
    pub backend_error: Option<String>,

    pub delays: Delays,

    next_id: u64,
    next_ticket: u64,
}

impl ChatState {
    /// A session seeded with one prompt and its default-tone answer.
    pub fn new(delays: Delays) -> Self {
        let mut state = Self::empty(delays);
        let user = state.alloc_id();
        state.messages.push(Message::user(user, SEED_PROMPT));
        let ai = state.alloc_id();
        state.messages.push(Message::ai(ai));
        state
    }

    /// A session with an empty transcript.
    pub fn empty(delays: Delays) -> Self {
        Self {
            messages: Vec::new(),
            is_generating: false,
            pending_reply: None,
            scroll_to_bottom: false,
            backend_error: None,
            delays,
            next_id: 1,
            next_ticket: 1,
        }
    }

    fn alloc_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Id of the newest AI message, if any.
    pub fn latest_ai_message(&self) -> Option<MessageId> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Ai)
            .map(|m| m.id)
    }

    /// Send the composer buffer as a user message and ask for a reply.
    ///
    /// Blank input, or input while a reply is already pending, has no effect.
    /// On success the buffer is cleared.
    pub fn send(&mut self, input: &mut InputState) -> Option<BackendAction> {
        if self.is_generating || validation::validate_prompt(&input.message_input).is_err() {
            return None;
        }

        let text = validation::sanitize_prompt(&input.message_input);
        let id = self.alloc_id();
        self.messages.push(Message::user(id, text));
        input.clear();

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_reply = Some(ticket);
        self.is_generating = true;
        self.scroll_to_bottom = true;

        tracing::debug!(message_id = %id, ticket = ticket.0, "prompt sent, reply scheduled");
        Some(BackendAction::ScheduleReply {
            ticket,
            delay: self.delays.reply,
        })
    }

    /// Abandon the pending reply. Nothing is appended.
    pub fn stop(&mut self) -> Option<BackendAction> {
        self.is_generating = false;
        let ticket = self.pending_reply.take()?;
        tracing::debug!(ticket = ticket.0, "reply cancelled");
        Some(BackendAction::CancelReply)
    }

    /// Request that an AI message be rewritten in `tone`.
    ///
    /// Ignored for unknown ids, user messages, the tone already selected, and
    /// messages that are mid-rewrite.
    pub fn change_tone(&mut self, id: MessageId, tone: Tone) -> Option<BackendAction> {
        let message = self.messages.iter_mut().find(|m| m.id == id)?;
        let tone_state = message.tone_state.as_mut()?;
        if tone_state.is_rewriting || tone_state.current == tone {
            return None;
        }

        tone_state.current = tone;
        tone_state.is_rewriting = true;
        tone_state.generation += 1;
        let generation = tone_state.generation;

        tracing::debug!(message_id = %id, %tone, generation, "rewrite scheduled");
        Some(BackendAction::ScheduleRewrite {
            message_id: id,
            tone,
            generation,
            delay: self.delays.rewrite,
        })
    }

    /// Undo the state change behind an action the scheduler never received.
    ///
    /// A lost reply ends generation; a lost rewrite returns the message to the
    /// tone its text is already in.
    pub fn rollback(&mut self, action: &BackendAction) {
        match action {
            BackendAction::ScheduleReply { ticket, .. } => {
                if self.pending_reply == Some(*ticket) {
                    self.stop();
                }
            }
            BackendAction::ScheduleRewrite {
                message_id,
                generation,
                ..
            } => {
                let tone_state = self
                    .messages
                    .iter_mut()
                    .find(|m| m.id == *message_id)
                    .and_then(|m| m.tone_state.as_mut());
                if let Some(tone_state) = tone_state {
                    if tone_state.generation == *generation && tone_state.is_rewriting {
                        tone_state.is_rewriting = false;
                        tone_state.current = tone_state.applied;
                    }
                }
            }
            BackendAction::CancelReply | BackendAction::Shutdown => {}
        }
    }

    /// Apply a scheduler event. Returns true if anything visible changed.
    pub fn apply_event(&mut self, event: GuiEvent) -> bool {
        match event {
            GuiEvent::ReplyReady(ticket) => {
                if self.pending_reply != Some(ticket) {
                    tracing::debug!(ticket = ticket.0, "stale reply discarded");
                    return false;
                }
                self.pending_reply = None;
                let id = self.alloc_id();
                self.messages.push(Message::ai(id));
                self.is_generating = false;
                self.scroll_to_bottom = true;
                tracing::debug!(message_id = %id, "reply arrived");
                true
            }
            GuiEvent::RewriteReady {
                message_id,
                tone,
                generation,
            } => {
                let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) else {
                    return false;
                };
                let Some(tone_state) = message.tone_state.as_mut() else {
                    return false;
                };
                // Only the most recent request may land
                if tone_state.generation != generation || tone_state.current != tone {
                    tracing::debug!(%message_id, %tone, generation, "stale rewrite discarded");
                    return false;
                }
                tone_state.is_rewriting = false;
                tone_state.applied = tone;
                message.content = tone.variation().to_string();
                self.scroll_to_bottom = true;
                true
            }
            GuiEvent::BackendError(error) => {
                tracing::error!(%error, "scheduler failure");
                self.backend_error = Some(error);
                true
            }
        }
    }
}
