//! Chat message types.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the chat transcript.
///
/// Messages are append-only: once in the transcript they are never edited or
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonically increasing within a transcript, starting at 1.
    pub id: u64,
    pub sender: Sender,
    pub body: String,
    /// Display time, e.g. "10:30 AM".
    pub timestamp: String,
    pub read: bool,
}
