//! Slack access: the two web API calls needed to read the standup conversation.

mod client;
pub mod payload;

pub use client::{SlackClient, endpoint_url};

use crate::errors::AppResult;
use crate::models::{DirectConversation, RawMessage};
use chrono::{DateTime, Utc};

/// User id of the Geekbot integration in Slack.
pub const STANDUP_BOT_ID: &str = "U2ADJ4J7R";

/// Source of conversations and messages for the timesheet pipeline.
pub trait MessageSource {
    /// Direct conversations of the logged-in user.
    fn list_direct_conversations(&self) -> AppResult<Vec<DirectConversation>>;

    /// Messages of `channel_id` sent at or after `oldest`.
    fn list_messages(&self, channel_id: &str, oldest: DateTime<Utc>)
    -> AppResult<Vec<RawMessage>>;
}
