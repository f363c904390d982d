//! Scheduler main loop: turns `BackendAction`s into delayed `GuiEvent`s.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;

use super::timers::{TimerKey, TimerSet};
use crate::error::PreviewError;
use crate::protocol::{BackendAction, GuiEvent};

/// How often the loop checks the action channel.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the scheduler on its own Tokio runtime until the UI hangs up.
pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let err = PreviewError::Runtime(e.to_string());
            tracing::error!(error = %err, "scheduler not started");
            let _ = event_tx.send(GuiEvent::BackendError(err.to_string()));
            return;
        }
    };

    rt.block_on(async move {
        let mut timers = TimerSet::new();
        tracing::info!("scheduler running");

        loop {
            // Drain everything the UI queued since the last tick
            loop {
                match action_rx.try_recv() {
                    Ok(action) => {
                        if !handle_action(action, &mut timers, &event_tx) {
                            tracing::info!(pending = timers.pending(), "scheduler shutting down");
                            timers.abort_all();
                            return;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        tracing::info!(pending = timers.pending(), "ui disconnected, scheduler exiting");
                        timers.abort_all();
                        return;
                    }
                }
            }

            timers.reap();
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    });
}

/// Apply one action. Returns false when the loop should exit.
fn handle_action(action: BackendAction, timers: &mut TimerSet, event_tx: &Sender<GuiEvent>) -> bool {
    match action {
        BackendAction::ScheduleReply { ticket, delay } => {
            let tx = event_tx.clone();
            timers.schedule(TimerKey::Reply, delay, move || {
                // If send fails, the UI has gone away - nothing to deliver to
                let _ = tx.send(GuiEvent::ReplyReady(ticket));
            });
        }
        BackendAction::CancelReply => {
            if !timers.cancel(TimerKey::Reply) {
                tracing::debug!("cancel requested with no reply pending");
            }
        }
        BackendAction::ScheduleRewrite {
            message_id,
            tone,
            generation,
            delay,
        } => {
            let tx = event_tx.clone();
            timers.schedule(TimerKey::Rewrite(message_id), delay, move || {
                let _ = tx.send(GuiEvent::RewriteReady {
                    message_id,
                    tone,
                    generation,
                });
            });
        }
        BackendAction::Shutdown => return false,
    }
    true
}
