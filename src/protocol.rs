use std::time::Duration;

use crate::message::MessageId;
use crate::tone::Tone;

/// Identifies one outstanding simulated reply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplyTicket(pub u64);

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendAction {
    /// Deliver `GuiEvent::ReplyReady` after `delay`
    ScheduleReply { ticket: ReplyTicket, delay: Duration },
    /// Abort the pending reply, if any
    CancelReply,
    /// Deliver `GuiEvent::RewriteReady` after `delay`, superseding any
    /// rewrite still pending for the same message
    ScheduleRewrite {
        message_id: MessageId,
        tone: Tone,
        generation: u64,
        delay: Duration,
    },
    /// Stop the scheduler and abort every pending task
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    /// The simulated reply delay for `ticket` elapsed
    ReplyReady(ReplyTicket),
    /// The simulated rewrite delay elapsed
    RewriteReady {
        message_id: MessageId,
        tone: Tone,
        generation: u64,
    },
    /// The scheduler could not start or failed
    BackendError(String),
}
