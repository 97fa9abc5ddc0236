use chrono::{DateTime, Utc};

/// One-to-one conversation between the logged-in user and someone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectConversation {
    pub id: String,
    pub user_id: String,
    pub latest: Option<DateTime<Utc>>,
}
