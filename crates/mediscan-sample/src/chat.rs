//! Chat transcript seed, canned reply, and quick suggestions.

use mediscan_contracts::chat::{ChatMessage, Sender};

/// The one reply the assistant ever sends to a new message.
pub const ASSISTANT_REPLY: &str =
    "I've received your message. Let me review your information and get back to you shortly.";

pub const ASSISTANT_NAME: &str = "Dr. AI Assistant";

pub const DISCLAIMER: &str = "This AI assistant provides general health information. \
For emergencies, please call your local emergency services.";

/// `(button label, draft text)` pairs offered under the transcript.
pub const QUICK_SUGGESTIONS: [(&str, &str); 3] = [
    ("Check my reports", "Can you check my recent health reports?"),
    ("Medication reminders", "What are my medication reminders?"),
    ("Book appointment", "Schedule an appointment"),
];

/// The five-message conversation the chat view opens with. Every message is
/// already read.
pub fn seed_transcript() -> Vec<ChatMessage> {
    let seed: [(Sender, &str, &str); 5] = [
        (
            Sender::Assistant,
            "Hello Sarah! I'm Dr. AI Assistant. How can I help you today?",
            "10:30 AM",
        ),
        (
            Sender::User,
            "Hi Doctor, I've been experiencing some headaches and fatigue for the past few days.",
            "10:32 AM",
        ),
        (
            Sender::Assistant,
            "I understand. Can you tell me more about the headaches? When do they typically \
             occur and how would you rate the severity on a scale of 1-10?",
            "10:33 AM",
        ),
        (
            Sender::User,
            "They usually happen in the afternoon, around 3-4 PM. I'd say they're about a 6 or \
             7 out of 10.",
            "10:35 AM",
        ),
        (
            Sender::Assistant,
            "Thank you for that information. Based on what you've shared, along with your \
             recent health data, here are my recommendations:\n\n\
             1. Ensure you're drinking at least 8 glasses of water daily\n\
             2. Take regular breaks from screen time\n\
             3. Try to maintain a consistent sleep schedule\n\
             4. Monitor your symptoms for the next 3 days\n\n\
             If the headaches persist or worsen, we should schedule an in-person consultation.",
            "10:36 AM",
        ),
    ];

    seed.into_iter()
        .zip(1u64..)
        .map(|((sender, body, timestamp), id)| ChatMessage {
            id,
            sender,
            body: body.to_string(),
            timestamp: timestamp.to_string(),
            read: true,
        })
        .collect()
}
