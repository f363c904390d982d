//! Scheduler event processing (reply arrivals, finished rewrites, failures).

use crossbeam_channel::Receiver;

use crate::protocol::GuiEvent;
use crate::state::ChatState;

/// Drain all pending events from the backend into `state`.
///
/// Returns true if any event changed what is on screen.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut ChatState) -> bool {
    let mut changed = false;
    while let Ok(event) = event_rx.try_recv() {
        changed |= state.apply_event(event);
    }
    changed
}

/// Whether the UI must keep polling for events.
pub fn has_pending_work(state: &ChatState) -> bool {
    state.is_generating || state.messages.iter().any(|m| m.is_rewriting())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_state::InputState;
    use crate::protocol::{BackendAction, ReplyTicket};
    use crate::state::Delays;
    use crate::tone::Tone;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_process_events_drains_channel() {
        let mut state = ChatState::new(Delays::default());
        let ai = state.latest_ai_message().unwrap();
        let (tx, rx) = unbounded();

        let mut input = InputState {
            message_input: "hi".into(),
        };
        let ticket = match state.send(&mut input) {
            Some(BackendAction::ScheduleReply { ticket, .. }) => ticket,
            other => panic!("unexpected {:?}", other),
        };
        state.change_tone(ai, Tone::Witty);
        assert!(has_pending_work(&state));

        tx.send(GuiEvent::ReplyReady(ticket)).unwrap();
        tx.send(GuiEvent::RewriteReady {
            message_id: ai,
            tone: Tone::Witty,
            generation: 1,
        })
        .unwrap();

        assert!(process_events(&rx, &mut state));
        assert!(rx.is_empty());
        assert_eq!(state.messages.len(), 4);
        assert_eq!(state.message(ai).unwrap().content, Tone::Witty.variation());
        assert!(!has_pending_work(&state));
    }

    #[test]
    fn test_only_stale_events_report_no_change() {
        let mut state = ChatState::new(Delays::default());
        let (tx, rx) = unbounded();
        tx.send(GuiEvent::ReplyReady(ReplyTicket(42))).unwrap();
        assert!(!process_events(&rx, &mut state));
        assert!(!process_events(&rx, &mut state));
    }
}
