//! Input bar state: the composer buffer and what the primary button does.
//!
//! Rendering of the input bar is derived entirely from this buffer and the
//! session's generating flag; there is no separate state machine here.

/// What the primary action button of the input bar currently does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Send the buffer; `enabled` is false while the buffer is blank
    Send { enabled: bool },
    /// Cancel the pending reply
    Stop,
}

/// What Enter does in the focused composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterAction {
    /// Take the key and send the buffer
    Submit,
    /// Take the key and do nothing, so no line break is inserted
    Swallow,
    /// Leave the key to the editor, which inserts a line break
    Newline,
}

#[derive(Default)]
pub struct InputState {
    /// Current prompt being composed
    pub message_input: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.message_input.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.message_input.clear();
    }

    /// Derive the primary button from the buffer and the generating flag.
    pub fn primary_action(&self, is_generating: bool) -> PrimaryAction {
        if is_generating {
            PrimaryAction::Stop
        } else {
            PrimaryAction::Send {
                enabled: !self.is_blank(),
            }
        }
    }

    /// Decide what an Enter press does given the Shift state.
    pub fn enter_action(&self, shift: bool, is_generating: bool) -> EnterAction {
        if shift {
            EnterAction::Newline
        } else if is_generating || self.is_blank() {
            EnterAction::Swallow
        } else {
            EnterAction::Submit
        }
    }
}
