//! Chat view state: an append-only transcript plus the compose box.

use chrono::{DateTime, Local};
use serde::Serialize;

use mediscan_contracts::chat::{ChatMessage, Sender};

/// Display format for message timestamps, e.g. "03:07 PM".
pub const TIMESTAMP_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, Serialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_id: u64,
    draft: String,
}

impl ChatLog {
    /// A transcript opening with `seed`.
    pub fn new(seed: Vec<ChatMessage>) -> Self {
        let next_id = seed.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            messages: seed,
            next_id,
            draft: String::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message stamped `at`. Blank text is ignored and yields
    /// `None`; otherwise returns the new message id.
    pub fn push_user(&mut self, text: &str, at: DateTime<Local>) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(Sender::User, text.to_string(), at))
    }

    /// Append an assistant message stamped `at`.
    pub fn push_assistant(&mut self, text: &str, at: DateTime<Local>) -> u64 {
        self.push(Sender::Assistant, text.to_string(), at)
    }

    fn push(&mut self, sender: Sender, body: String, at: DateTime<Local>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            body,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            read: false,
        });
        id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the draft, leaving the compose box empty.
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 22, h, m, 0).unwrap()
    }

    fn seed() -> Vec<ChatMessage> {
        vec![ChatMessage {
            id: 1,
            sender: Sender::Assistant,
            body: "Hello".to_string(),
            timestamp: "10:30 AM".to_string(),
            read: true,
        }]
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut log = ChatLog::new(seed());
        assert_eq!(log.push_user("", at(9, 0)), None);
        assert_eq!(log.push_user("   \t\n", at(9, 0)), None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn user_message_is_unread_and_stamped() {
        let mut log = ChatLog::new(seed());
        let id = log.push_user("hello", at(15, 7)).unwrap();

        let msg = log.messages().last().unwrap();
        assert_eq!(msg.id, id);
        assert_eq!(msg.id, 2);
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.body, "hello");
        assert_eq!(msg.timestamp, "03:07 PM");
        assert!(!msg.read);
    }

    #[test]
    fn ids_keep_increasing_across_senders() {
        let mut log = ChatLog::new(Vec::new());
        let a = log.push_user("one", at(9, 0)).unwrap();
        let b = log.push_assistant("two", at(9, 0));
        let c = log.push_user("three", at(9, 1)).unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn take_draft_empties_the_compose_box() {
        let mut log = ChatLog::new(seed());
        log.set_draft("Schedule an appointment");
        assert_eq!(log.take_draft(), "Schedule an appointment");
        assert_eq!(log.draft(), "");
    }
}
