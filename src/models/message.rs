use chrono::{DateTime, Utc};

/// A message as read from a Slack conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub user_id: String,          // ⇔ messages[].user
    pub bot_id: String,           // ⇔ messages[].bot_id (empty for humans)
    pub timestamp: DateTime<Utc>, // ⇔ messages[].ts
    pub text: String,             // ⇔ messages[].text
}

impl RawMessage {
    pub fn new(user_id: &str, timestamp: DateTime<Utc>, text: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            bot_id: String::new(),
            timestamp,
            text: text.to_string(),
        }
    }

    /// Messages carrying a bot id are posted by an integration, not by the user.
    pub fn is_from_bot(&self) -> bool {
        !self.bot_id.is_empty()
    }
}
