use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single conversation entry. Messages are never mutated after creation;
/// the list they live in is append-only and cleared only by a new chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn new_user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn new_assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Locale-style time for display next to the message.
    pub fn format_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_construction() {
        let message = ChatMessage::new_user("Hello there");

        assert_eq!(message.role, ChatRole::User);
        assert_eq!(message.content, "Hello there");
        assert!(message.timestamp <= Local::now());
    }

    #[test]
    fn test_assistant_message_construction() {
        let message = ChatMessage::new_assistant("Hi, how can I help?");

        assert_eq!(message.role, ChatRole::Assistant);
        assert_eq!(message.content, "Hi, how can I help?");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ChatRole::User.to_string(), "user");
        assert_eq!(ChatRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_explicit_timestamp_kept() {
        let stamp = Local::now() - chrono::Duration::minutes(5);
        let message = ChatMessage::new_user("old").with_timestamp(stamp);

        assert_eq!(message.timestamp, stamp);
        assert_eq!(message.format_time(), stamp.format("%H:%M:%S").to_string());
    }
}
