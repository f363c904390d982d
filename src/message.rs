use chrono::Local;

use crate::tone::Tone;

/// Unique identifier of a message within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

/// Tone bookkeeping carried by AI messages only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToneState {
    /// Last requested tone, updated immediately even while rewriting
    pub current: Tone,
    pub is_rewriting: bool,
    /// Tone of the text currently in `content`
    pub applied: Tone,
    /// Bumped on every accepted tone request; tags the pending rewrite
    pub generation: u64,
}

/// A single chat bubble
#[derive(Clone, Debug)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub tone_state: Option<ToneState>,
    /// Local time the message was created, formatted as HH:MM
    pub timestamp: String,
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            tone_state: None,
            timestamp: now_hhmm(),
        }
    }

    /// An AI reply in the default tone.
    pub fn ai(id: MessageId) -> Self {
        Self {
            id,
            role: Role::Ai,
            content: Tone::Default.variation().to_string(),
            tone_state: Some(ToneState::default()),
            timestamp: now_hhmm(),
        }
    }

    pub fn is_rewriting(&self) -> bool {
        self.tone_state.is_some_and(|t| t.is_rewriting)
    }
}

fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_tone_state() {
        let msg = Message::user(MessageId(1), "hello");
        assert_eq!(msg.role, Role::User);
        assert!(msg.tone_state.is_none());
        assert!(!msg.is_rewriting());
        assert_eq!(msg.timestamp.len(), 5);
    }

    #[test]
    fn test_ai_message_starts_in_default_tone() {
        let msg = Message::ai(MessageId(2));
        assert_eq!(msg.role, Role::Ai);
        assert_eq!(msg.content, Tone::Default.variation());
        let tone = msg.tone_state.unwrap();
        assert_eq!(tone.current, Tone::Default);
        assert!(!tone.is_rewriting);
        assert_eq!(tone.generation, 0);
    }

    #[test]
    fn test_message_id_display() {
        assert_eq!(MessageId(7).to_string(), "msg-7");
    }
}
